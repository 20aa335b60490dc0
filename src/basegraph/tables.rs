//! Base graph shift-coefficient tables.
//!
//! This module contains the shift coefficients for the two 5G NR base graphs,
//! with one coefficient per lifting size set. The nonzero positions of a base
//! graph are the same for all eight sets; the shift applied for a lifting
//! size `Zc` belonging to set `i` is `shifts[i] % Zc`.
//!
//! ## References
//! \[1\] [3GPP TS 38.212 V17.3.0 section 5.3.2](https://www.3gpp.org/DynaReport/38212.htm).

/// One nonzero entry of a base graph.
///
/// The entry expands to a `Zc x Zc` identity matrix cyclically rotated by
/// `shifts[set] % Zc`.
pub(super) struct BaseGraphEntry {
    pub(super) row: u8,
    pub(super) col: u8,
    pub(super) shifts: [u16; 8],
}

const fn e(row: u8, col: u8, shifts: [u16; 8]) -> BaseGraphEntry {
    BaseGraphEntry { row, col, shifts }
}

// Table 5.3.2-2 in [1].
pub(super) static BG1: &[BaseGraphEntry] = &[
    e(0, 0, [250, 307, 73, 223, 211, 294, 0, 135]),
    e(0, 1, [69, 19, 15, 16, 198, 118, 0, 227]),
    e(0, 2, [226, 50, 103, 94, 188, 167, 0, 126]),
    e(0, 3, [159, 369, 49, 91, 186, 330, 0, 134]),
    e(0, 5, [100, 181, 240, 74, 219, 207, 0, 84]),
    e(0, 6, [10, 216, 39, 10, 4, 165, 0, 83]),
    e(0, 9, [59, 317, 15, 0, 29, 243, 0, 53]),
    e(0, 10, [229, 288, 162, 205, 144, 250, 0, 225]),
    e(0, 11, [110, 109, 215, 216, 116, 1, 0, 205]),
    e(0, 12, [191, 17, 164, 21, 216, 339, 0, 128]),
    e(0, 13, [9, 357, 133, 215, 115, 201, 0, 75]),
    e(0, 15, [195, 215, 298, 14, 233, 53, 0, 135]),
    e(0, 16, [23, 106, 110, 70, 144, 347, 0, 217]),
    e(0, 18, [190, 242, 113, 141, 95, 304, 0, 220]),
    e(0, 19, [35, 180, 16, 198, 216, 167, 0, 90]),
    e(0, 20, [239, 330, 189, 104, 73, 47, 0, 105]),
    e(0, 21, [31, 346, 32, 81, 261, 188, 0, 137]),
    e(0, 22, [1, 1, 1, 1, 1, 1, 105, 1]),
    e(0, 23, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(1, 0, [107, 166, 2, 101, 201, 162, 198, 211]),
    e(1, 2, [117, 351, 156, 70, 226, 331, 44, 121]),
    e(1, 3, [59, 124, 8, 200, 245, 271, 206, 13]),
    e(1, 4, [154, 82, 223, 140, 281, 25, 57, 155]),
    e(1, 5, [195, 157, 76, 83, 73, 104, 80, 76]),
    e(1, 7, [40, 18, 56, 63, 167, 34, 105, 133]),
    e(1, 8, [131, 35, 189, 10, 270, 54, 207, 91]),
    e(1, 9, [21, 113, 192, 68, 185, 204, 72, 96]),
    e(1, 11, [216, 328, 255, 125, 164, 337, 168, 221]),
    e(1, 12, [115, 91, 314, 84, 131, 59, 152, 224]),
    e(1, 14, [56, 13, 152, 5, 0, 212, 157, 162]),
    e(1, 15, [71, 63, 50, 116, 156, 35, 204, 161]),
    e(1, 16, [98, 325, 138, 194, 20, 337, 17, 59]),
    e(1, 17, [225, 28, 319, 179, 263, 125, 115, 155]),
    e(1, 19, [23, 108, 57, 133, 25, 306, 116, 129]),
    e(1, 21, [59, 330, 42, 212, 10, 220, 161, 172]),
    e(1, 22, [0, 0, 0, 0, 0, 0, 0, 0]),
    e(1, 23, [0, 0, 0, 0, 0, 0, 0, 0]),
    e(1, 24, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(2, 0, [171, 58, 167, 215, 55, 133, 89, 54]),
    e(2, 1, [157, 40, 83, 52, 114, 105, 123, 13]),
    e(2, 2, [68, 112, 30, 126, 116, 342, 183, 207]),
    e(2, 4, [89, 22, 225, 222, 206, 84, 55, 135]),
    e(2, 5, [237, 37, 133, 123, 207, 154, 1, 72]),
    e(2, 6, [211, 303, 201, 113, 200, 92, 158, 139]),
    e(2, 7, [18, 342, 246, 107, 120, 273, 177, 154]),
    e(2, 8, [31, 21, 211, 221, 225, 242, 129, 132]),
    e(2, 9, [152, 263, 222, 96, 190, 173, 110, 211]),
    e(2, 10, [58, 54, 305, 71, 103, 170, 154, 91]),
    e(2, 13, [218, 124, 195, 198, 45, 259, 199, 164]),
    e(2, 14, [6, 77, 73, 146, 52, 87, 9, 203]),
    e(2, 15, [57, 379, 9, 63, 259, 311, 87, 122]),
    e(2, 17, [104, 277, 14, 126, 97, 14, 195, 210]),
    e(2, 18, [18, 214, 292, 76, 60, 5, 56, 168]),
    e(2, 19, [124, 291, 138, 217, 166, 47, 55, 152]),
    e(2, 20, [208, 286, 296, 221, 33, 237, 19, 224]),
    e(2, 24, [0, 0, 0, 0, 0, 0, 0, 0]),
    e(2, 25, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(3, 0, [13, 68, 267, 2, 111, 239, 138, 202]),
    e(3, 1, [70, 318, 248, 204, 18, 152, 197, 116]),
    e(3, 3, [248, 74, 81, 22, 154, 275, 179, 218]),
    e(3, 4, [191, 354, 148, 40, 224, 308, 146, 104]),
    e(3, 6, [130, 15, 291, 141, 197, 118, 175, 147]),
    e(3, 7, [199, 193, 24, 66, 253, 148, 20, 71]),
    e(3, 8, [160, 312, 313, 181, 44, 119, 26, 209]),
    e(3, 10, [171, 66, 174, 21, 167, 197, 157, 222]),
    e(3, 11, [221, 45, 116, 111, 145, 100, 183, 62]),
    e(3, 12, [202, 28, 36, 77, 177, 201, 109, 48]),
    e(3, 13, [241, 42, 1, 51, 119, 121, 173, 163]),
    e(3, 14, [22, 376, 3, 134, 274, 219, 92, 62]),
    e(3, 16, [66, 187, 232, 8, 87, 317, 154, 42]),
    e(3, 17, [88, 319, 190, 58, 107, 210, 59, 208]),
    e(3, 18, [46, 27, 49, 63, 125, 151, 197, 62]),
    e(3, 20, [77, 81, 55, 167, 176, 310, 42, 70]),
    e(3, 21, [44, 230, 228, 109, 48, 21, 164, 29]),
    e(3, 22, [0, 0, 0, 0, 0, 0, 0, 0]),
    e(3, 25, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(4, 0, [180, 186, 97, 216, 274, 220, 109, 193]),
    e(4, 1, [219, 249, 200, 200, 130, 128, 6, 48]),
    e(4, 26, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(5, 0, [116, 245, 20, 18, 81, 272, 57, 6]),
    e(5, 1, [154, 219, 293, 18, 10, 330, 197, 97]),
    e(5, 3, [204, 5, 83, 33, 144, 77, 19, 54]),
    e(5, 12, [7, 126, 136, 134, 93, 153, 24, 193]),
    e(5, 16, [109, 34, 69, 194, 81, 123, 99, 87]),
    e(5, 21, [121, 297, 244, 79, 20, 5, 30, 7]),
    e(5, 22, [255, 273, 172, 91, 243, 187, 145, 122]),
    e(5, 27, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(6, 0, [85, 297, 90, 37, 41, 78, 44, 161]),
    e(6, 6, [85, 279, 56, 141, 214, 30, 166, 157]),
    e(6, 10, [22, 44, 56, 136, 231, 150, 133, 42]),
    e(6, 11, [13, 298, 181, 95, 20, 83, 182, 48]),
    e(6, 13, [201, 306, 254, 169, 78, 351, 28, 23]),
    e(6, 17, [228, 90, 266, 152, 78, 211, 26, 136]),
    e(6, 18, [117, 93, 61, 10, 19, 228, 1, 60]),
    e(6, 20, [43, 287, 71, 103, 24, 86, 177, 235]),
    e(6, 28, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(7, 0, [244, 346, 15, 142, 124, 43, 107, 32]),
    e(7, 1, [163, 20, 205, 114, 252, 41, 18, 150]),
    e(7, 4, [225, 211, 140, 113, 169, 69, 202, 199]),
    e(7, 7, [133, 273, 231, 76, 157, 108, 23, 112]),
    e(7, 8, [173, 42, 101, 107, 46, 158, 164, 52]),
    e(7, 14, [186, 272, 91, 13, 83, 110, 184, 100]),
    e(7, 29, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(8, 0, [112, 74, 141, 125, 97, 263, 33, 173]),
    e(8, 1, [181, 329, 208, 222, 223, 69, 158, 187]),
    e(8, 3, [41, 35, 219, 161, 166, 242, 21, 118]),
    e(8, 12, [62, 245, 56, 141, 278, 156, 13, 228]),
    e(8, 16, [195, 340, 217, 6, 37, 40, 41, 54]),
    e(8, 19, [6, 371, 208, 73, 262, 213, 173, 61]),
    e(8, 21, [149, 45, 275, 172, 133, 43, 143, 179]),
    e(8, 22, [241, 326, 248, 29, 30, 36, 107, 172]),
    e(8, 30, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(9, 0, [241, 77, 310, 183, 98, 304, 176, 197]),
    e(9, 1, [98, 154, 193, 160, 8, 234, 57, 178]),
    e(9, 10, [92, 335, 220, 18, 153, 209, 115, 150]),
    e(9, 11, [32, 124, 318, 104, 123, 328, 154, 83]),
    e(9, 13, [203, 128, 317, 119, 174, 224, 60, 154]),
    e(9, 17, [0, 350, 139, 208, 157, 167, 142, 213]),
    e(9, 18, [193, 339, 37, 11, 230, 286, 111, 38]),
    e(9, 20, [145, 225, 273, 201, 37, 205, 124, 176]),
    e(9, 31, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(10, 1, [226, 328, 132, 122, 38, 251, 139, 19]),
    e(10, 2, [16, 218, 100, 148, 67, 231, 35, 90]),
    e(10, 4, [209, 204, 253, 3, 247, 303, 203, 147]),
    e(10, 7, [50, 149, 92, 42, 230, 156, 175, 177]),
    e(10, 8, [59, 135, 61, 15, 23, 241, 122, 179]),
    e(10, 14, [231, 62, 115, 189, 224, 8, 111, 216]),
    e(10, 32, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(11, 0, [93, 370, 111, 218, 8, 239, 83, 91]),
    e(11, 1, [54, 138, 96, 173, 4, 273, 76, 195]),
    e(11, 12, [191, 97, 87, 51, 274, 261, 142, 20]),
    e(11, 16, [78, 243, 183, 175, 224, 7, 67, 137]),
    e(11, 21, [0, 84, 57, 17, 247, 275, 58, 194]),
    e(11, 22, [154, 49, 114, 119, 41, 31, 29, 135]),
    e(11, 33, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(12, 0, [225, 201, 155, 104, 197, 151, 179, 73]),
    e(12, 1, [20, 96, 219, 89, 279, 316, 60, 182]),
    e(12, 10, [142, 252, 278, 157, 104, 189, 205, 191]),
    e(12, 11, [74, 129, 34, 223, 144, 261, 121, 44]),
    e(12, 13, [75, 97, 15, 138, 203, 56, 167, 173]),
    e(12, 18, [132, 4, 101, 186, 261, 204, 15, 46]),
    e(12, 34, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(13, 0, [148, 49, 287, 193, 240, 345, 126, 173]),
    e(13, 3, [165, 74, 89, 87, 115, 171, 138, 152]),
    e(13, 7, [222, 178, 115, 26, 219, 192, 64, 199]),
    e(13, 20, [229, 159, 76, 26, 247, 175, 109, 214]),
    e(13, 23, [142, 38, 18, 0, 145, 231, 36, 204]),
    e(13, 35, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(14, 0, [172, 219, 262, 156, 154, 146, 32, 176]),
    e(14, 12, [241, 360, 160, 45, 249, 289, 203, 166]),
    e(14, 15, [125, 284, 299, 87, 22, 291, 203, 142]),
    e(14, 16, [215, 81, 236, 173, 60, 266, 113, 30]),
    e(14, 17, [9, 209, 125, 157, 108, 201, 189, 172]),
    e(14, 21, [216, 20, 114, 2, 122, 312, 56, 43]),
    e(14, 36, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(15, 0, [161, 324, 42, 106, 236, 106, 28, 109]),
    e(15, 1, [247, 270, 197, 52, 224, 42, 199, 13]),
    e(15, 10, [106, 75, 280, 14, 107, 161, 47, 140]),
    e(15, 13, [53, 94, 13, 38, 253, 307, 62, 202]),
    e(15, 18, [180, 17, 65, 63, 127, 297, 88, 94]),
    e(15, 25, [117, 269, 100, 108, 74, 314, 112, 80]),
    e(15, 37, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(16, 1, [106, 368, 208, 220, 114, 323, 79, 66]),
    e(16, 3, [233, 51, 189, 76, 169, 222, 197, 84]),
    e(16, 11, [146, 78, 105, 179, 269, 37, 207, 199]),
    e(16, 20, [110, 305, 43, 186, 4, 1, 54, 164]),
    e(16, 22, [177, 307, 6, 150, 82, 219, 151, 121]),
    e(16, 38, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(17, 0, [82, 2, 231, 2, 265, 92, 91, 30]),
    e(17, 14, [4, 321, 86, 129, 127, 44, 79, 48]),
    e(17, 16, [96, 226, 120, 25, 23, 16, 155, 36]),
    e(17, 17, [93, 97, 271, 106, 185, 321, 80, 67]),
    e(17, 21, [94, 350, 161, 157, 164, 293, 114, 100]),
    e(17, 39, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(18, 1, [105, 305, 24, 56, 48, 158, 166, 238]),
    e(18, 12, [76, 334, 243, 42, 48, 235, 124, 53]),
    e(18, 13, [188, 343, 291, 157, 178, 350, 60, 155]),
    e(18, 18, [71, 113, 189, 185, 138, 167, 101, 44]),
    e(18, 19, [114, 361, 271, 14, 241, 231, 87, 31]),
    e(18, 40, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(19, 0, [217, 247, 276, 61, 185, 235, 68, 169]),
    e(19, 1, [96, 140, 0, 12, 260, 292, 181, 119]),
    e(19, 7, [190, 288, 258, 186, 204, 103, 157, 106]),
    e(19, 8, [201, 341, 3, 172, 226, 203, 200, 55]),
    e(19, 10, [158, 374, 56, 209, 133, 82, 148, 106]),
    e(19, 41, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(20, 0, [218, 341, 252, 60, 164, 186, 52, 234]),
    e(20, 3, [103, 160, 6, 212, 141, 219, 171, 215]),
    e(20, 9, [34, 244, 69, 201, 66, 250, 101, 63]),
    e(20, 11, [192, 322, 240, 121, 185, 154, 140, 172]),
    e(20, 22, [163, 327, 220, 111, 65, 97, 56, 31]),
    e(20, 42, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(21, 1, [234, 378, 245, 212, 162, 308, 129, 191]),
    e(21, 5, [170, 304, 277, 121, 131, 83, 140, 80]),
    e(21, 16, [242, 80, 243, 144, 41, 239, 12, 49]),
    e(21, 20, [193, 375, 172, 187, 88, 128, 104, 222]),
    e(21, 21, [237, 163, 23, 18, 98, 222, 179, 234]),
    e(21, 43, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(22, 0, [186, 2, 84, 25, 235, 119, 199, 15]),
    e(22, 12, [251, 156, 166, 184, 28, 137, 96, 175]),
    e(22, 13, [125, 158, 104, 211, 60, 302, 5, 93]),
    e(22, 17, [170, 252, 229, 42, 264, 190, 196, 24]),
    e(22, 44, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(23, 1, [244, 359, 269, 161, 28, 95, 150, 10]),
    e(23, 2, [117, 121, 172, 189, 64, 123, 142, 96]),
    e(23, 10, [92, 343, 154, 110, 141, 31, 166, 45]),
    e(23, 18, [111, 203, 145, 172, 40, 219, 81, 143]),
    e(23, 45, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(24, 0, [133, 207, 123, 65, 9, 57, 63, 238]),
    e(24, 3, [22, 156, 73, 101, 11, 51, 52, 131]),
    e(24, 11, [138, 178, 225, 125, 279, 323, 195, 210]),
    e(24, 22, [157, 221, 172, 10, 84, 257, 43, 208]),
    e(24, 46, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(25, 1, [38, 34, 30, 118, 141, 268, 155, 147]),
    e(25, 6, [189, 362, 197, 201, 278, 324, 162, 138]),
    e(25, 16, [206, 262, 76, 13, 209, 272, 57, 103]),
    e(25, 21, [138, 67, 120, 0, 93, 22, 118, 112]),
    e(25, 47, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(26, 0, [126, 172, 139, 71, 119, 217, 4, 189]),
    e(26, 12, [188, 350, 67, 143, 260, 28, 162, 212]),
    e(26, 13, [73, 129, 18, 203, 233, 97, 144, 77]),
    e(26, 18, [59, 65, 299, 204, 161, 247, 140, 177]),
    e(26, 48, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(27, 1, [54, 312, 170, 151, 249, 174, 2, 57]),
    e(27, 2, [119, 182, 103, 148, 139, 156, 88, 208]),
    e(27, 5, [53, 116, 11, 153, 58, 337, 46, 64]),
    e(27, 22, [12, 290, 307, 52, 96, 335, 49, 94]),
    e(27, 49, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(28, 0, [49, 103, 66, 111, 2, 106, 183, 78]),
    e(28, 4, [66, 270, 227, 198, 204, 220, 30, 179]),
    e(28, 10, [188, 145, 202, 223, 244, 88, 96, 220]),
    e(28, 13, [181, 267, 263, 22, 198, 281, 170, 79]),
    e(28, 50, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(29, 1, [44, 62, 94, 177, 47, 155, 163, 148]),
    e(29, 3, [207, 343, 169, 177, 54, 84, 127, 231]),
    e(29, 11, [42, 221, 81, 60, 260, 253, 110, 25]),
    e(29, 21, [44, 168, 40, 128, 95, 333, 191, 57]),
    e(29, 51, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(30, 0, [211, 115, 139, 89, 122, 333, 83, 201]),
    e(30, 5, [63, 5, 21, 26, 214, 19, 80, 107]),
    e(30, 16, [62, 179, 194, 104, 282, 320, 29, 89]),
    e(30, 20, [193, 175, 279, 88, 31, 5, 132, 36]),
    e(30, 52, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(31, 1, [174, 135, 167, 29, 1, 180, 151, 164]),
    e(31, 12, [253, 143, 69, 20, 187, 220, 45, 7]),
    e(31, 13, [173, 72, 194, 0, 31, 79, 47, 12]),
    e(31, 14, [152, 363, 214, 5, 109, 174, 120, 53]),
    e(31, 53, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(32, 0, [248, 4, 194, 184, 165, 72, 34, 87]),
    e(32, 2, [105, 125, 110, 25, 110, 30, 57, 231]),
    e(32, 6, [46, 217, 288, 173, 117, 342, 72, 190]),
    e(32, 54, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(33, 1, [160, 242, 202, 17, 97, 182, 50, 235]),
    e(33, 7, [55, 13, 205, 99, 46, 233, 74, 180]),
    e(33, 16, [207, 50, 55, 214, 102, 293, 161, 88]),
    e(33, 18, [133, 179, 212, 195, 91, 349, 6, 120]),
    e(33, 55, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(34, 0, [116, 66, 298, 140, 156, 204, 2, 231]),
    e(34, 4, [76, 240, 263, 188, 152, 34, 177, 87]),
    e(34, 10, [34, 154, 44, 220, 164, 310, 20, 88]),
    e(34, 21, [1, 48, 279, 215, 169, 35, 27, 193]),
    e(34, 56, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(35, 1, [177, 102, 104, 116, 120, 257, 131, 81]),
    e(35, 12, [234, 115, 187, 129, 246, 141, 81, 202]),
    e(35, 13, [249, 352, 260, 102, 266, 127, 140, 143]),
    e(35, 22, [139, 225, 63, 144, 271, 164, 30, 59]),
    e(35, 57, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(36, 0, [91, 64, 240, 214, 139, 113, 115, 51]),
    e(36, 2, [17, 259, 104, 55, 37, 58, 62, 114]),
    e(36, 5, [28, 342, 165, 69, 214, 74, 127, 139]),
    e(36, 18, [43, 35, 78, 103, 204, 221, 40, 196]),
    e(36, 58, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(37, 1, [80, 282, 222, 209, 205, 280, 55, 120]),
    e(37, 10, [249, 0, 22, 49, 247, 288, 38, 134]),
    e(37, 13, [40, 247, 194, 74, 186, 3, 67, 20]),
    e(37, 16, [181, 246, 48, 70, 182, 205, 1, 49]),
    e(37, 59, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(38, 0, [129, 344, 236, 31, 166, 208, 179, 161]),
    e(38, 3, [72, 56, 223, 189, 186, 114, 103, 141]),
    e(38, 7, [232, 101, 44, 147, 169, 55, 157, 68]),
    e(38, 23, [241, 131, 192, 142, 198, 335, 191, 23]),
    e(38, 60, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(39, 1, [56, 105, 229, 159, 43, 66, 0, 121]),
    e(39, 2, [25, 200, 156, 55, 143, 161, 184, 163]),
    e(39, 17, [32, 12, 178, 136, 119, 202, 173, 129]),
    e(39, 61, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(40, 0, [150, 75, 275, 172, 46, 152, 200, 181]),
    e(40, 8, [150, 40, 89, 85, 226, 153, 172, 220]),
    e(40, 13, [20, 329, 143, 164, 138, 223, 194, 45]),
    e(40, 21, [156, 190, 83, 176, 127, 348, 181, 153]),
    e(40, 62, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(41, 1, [200, 130, 195, 43, 10, 75, 26, 59]),
    e(41, 3, [86, 93, 292, 167, 93, 27, 205, 182]),
    e(41, 10, [118, 367, 48, 206, 135, 35, 177, 48]),
    e(41, 22, [248, 65, 100, 160, 65, 258, 63, 183]),
    e(41, 63, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(42, 0, [122, 218, 32, 40, 177, 4, 127, 142]),
    e(42, 7, [177, 69, 130, 164, 161, 128, 14, 77]),
    e(42, 12, [114, 217, 257, 39, 122, 228, 31, 109]),
    e(42, 16, [114, 116, 267, 17, 58, 138, 104, 120]),
    e(42, 64, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(43, 1, [64, 121, 102, 212, 45, 179, 97, 173]),
    e(43, 2, [197, 228, 282, 203, 239, 203, 175, 60]),
    e(43, 5, [44, 208, 92, 199, 259, 294, 50, 43]),
    e(43, 13, [102, 320, 40, 143, 173, 182, 187, 98]),
    e(43, 65, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(44, 0, [126, 241, 257, 85, 62, 153, 175, 0]),
    e(44, 4, [75, 287, 169, 77, 149, 288, 167, 134]),
    e(44, 9, [230, 116, 256, 59, 41, 227, 2, 227]),
    e(44, 22, [62, 175, 161, 24, 184, 193, 86, 168]),
    e(44, 66, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(45, 1, [91, 279, 20, 9, 133, 16, 192, 193]),
    e(45, 3, [173, 45, 301, 26, 123, 302, 61, 148]),
    e(45, 13, [124, 175, 273, 159, 205, 92, 22, 189]),
    e(45, 21, [69, 203, 200, 209, 233, 30, 82, 182]),
    e(45, 67, [0, 0, 0, 0, 0, 0, 0, 0]),
];

// Table 5.3.2-3 in [1].
pub(super) static BG2: &[BaseGraphEntry] = &[
    e(0, 0, [9, 174, 0, 72, 3, 156, 143, 145]),
    e(0, 1, [117, 97, 0, 110, 26, 143, 19, 131]),
    e(0, 2, [204, 166, 0, 23, 53, 14, 176, 71]),
    e(0, 3, [26, 66, 0, 181, 35, 3, 165, 21]),
    e(0, 6, [189, 71, 0, 95, 115, 40, 196, 23]),
    e(0, 9, [205, 172, 0, 8, 127, 123, 13, 112]),
    e(0, 10, [0, 0, 0, 1, 0, 0, 0, 1]),
    e(0, 11, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(1, 0, [187, 344, 286, 8, 139, 11, 100, 15]),
    e(1, 3, [242, 176, 274, 205, 82, 268, 6, 60]),
    e(1, 4, [97, 0, 260, 162, 151, 213, 21, 115]),
    e(1, 5, [19, 301, 112, 10, 192, 91, 201, 217]),
    e(1, 6, [131, 79, 37, 103, 283, 190, 108, 214]),
    e(1, 7, [151, 128, 41, 117, 256, 253, 176, 73]),
    e(1, 8, [84, 78, 131, 11, 274, 47, 4, 9]),
    e(1, 9, [243, 145, 188, 140, 168, 154, 164, 209]),
    e(1, 11, [0, 0, 0, 0, 0, 0, 0, 0]),
    e(1, 12, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(2, 0, [221, 262, 47, 47, 127, 112, 124, 151]),
    e(2, 1, [198, 48, 16, 218, 45, 100, 105, 52]),
    e(2, 3, [101, 322, 145, 157, 173, 80, 40, 137]),
    e(2, 4, [127, 212, 290, 121, 23, 140, 67, 200]),
    e(2, 8, [221, 3, 145, 171, 285, 68, 109, 174]),
    e(2, 10, [0, 0, 0, 0, 0, 0, 0, 0]),
    e(2, 12, [0, 0, 0, 0, 0, 0, 0, 0]),
    e(2, 13, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(3, 1, [35, 130, 15, 223, 57, 256, 0, 22]),
    e(3, 2, [102, 5, 153, 112, 145, 150, 157, 171]),
    e(3, 4, [230, 2, 300, 1, 178, 86, 182, 238]),
    e(3, 5, [191, 23, 208, 5, 164, 337, 114, 103]),
    e(3, 6, [229, 195, 198, 88, 224, 108, 133, 228]),
    e(3, 7, [211, 372, 195, 204, 269, 184, 119, 219]),
    e(3, 8, [55, 181, 231, 110, 80, 3, 96, 90]),
    e(3, 9, [6, 60, 152, 169, 216, 306, 19, 8]),
    e(3, 10, [0, 0, 0, 0, 0, 0, 0, 0]),
    e(3, 13, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(4, 0, [9, 285, 122, 41, 214, 287, 174, 142]),
    e(4, 1, [149, 52, 141, 74, 14, 204, 170, 201]),
    e(4, 11, [2, 279, 17, 72, 271, 294, 137, 138]),
    e(4, 14, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(5, 0, [170, 342, 267, 28, 148, 170, 126, 108]),
    e(5, 1, [193, 194, 296, 100, 209, 126, 141, 50]),
    e(5, 5, [23, 59, 132, 201, 135, 14, 138, 30]),
    e(5, 7, [116, 364, 269, 63, 128, 200, 88, 69]),
    e(5, 11, [140, 117, 217, 55, 177, 62, 93, 93]),
    e(5, 15, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(6, 0, [152, 30, 245, 83, 155, 19, 150, 50]),
    e(6, 5, [152, 268, 219, 3, 191, 259, 188, 4]),
    e(6, 7, [152, 265, 71, 210, 4, 251, 80, 10]),
    e(6, 9, [227, 83, 61, 26, 47, 186, 145, 149]),
    e(6, 11, [172, 362, 319, 138, 198, 115, 106, 40]),
    e(6, 16, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(7, 1, [50, 327, 14, 163, 123, 88, 72, 113]),
    e(7, 5, [144, 77, 101, 148, 9, 131, 35, 178]),
    e(7, 7, [56, 23, 49, 104, 211, 14, 139, 6]),
    e(7, 11, [215, 151, 304, 73, 240, 51, 155, 32]),
    e(7, 13, [151, 11, 19, 31, 56, 160, 0, 27]),
    e(7, 17, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(8, 0, [49, 132, 284, 1, 137, 139, 120, 98]),
    e(8, 1, [219, 91, 185, 76, 65, 235, 1, 217]),
    e(8, 12, [219, 158, 112, 57, 252, 348, 189, 107]),
    e(8, 18, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(9, 1, [68, 145, 316, 65, 131, 124, 111, 8]),
    e(9, 8, [140, 277, 170, 181, 96, 219, 158, 135]),
    e(9, 10, [129, 17, 156, 160, 95, 259, 24, 14]),
    e(9, 11, [137, 221, 246, 212, 122, 320, 115, 139]),
    e(9, 19, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(10, 0, [44, 7, 278, 106, 111, 114, 191, 159]),
    e(10, 1, [89, 256, 105, 127, 39, 48, 139, 9]),
    e(10, 6, [171, 137, 200, 192, 161, 164, 136, 67]),
    e(10, 7, [172, 207, 17, 161, 89, 87, 202, 84]),
    e(10, 20, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(11, 0, [179, 118, 179, 210, 51, 160, 58, 44]),
    e(11, 7, [72, 39, 261, 76, 250, 134, 7, 126]),
    e(11, 9, [139, 154, 46, 65, 209, 256, 118, 98]),
    e(11, 13, [133, 39, 162, 129, 185, 235, 10, 236]),
    e(11, 21, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(12, 1, [133, 35, 64, 166, 127, 133, 207, 70]),
    e(12, 3, [27, 234, 138, 7, 265, 11, 196, 143]),
    e(12, 11, [154, 48, 87, 95, 264, 258, 117, 205]),
    e(12, 22, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(13, 0, [49, 251, 1, 192, 209, 150, 120, 110]),
    e(13, 1, [56, 121, 39, 176, 31, 275, 65, 139]),
    e(13, 8, [152, 139, 265, 104, 168, 61, 35, 169]),
    e(13, 13, [109, 188, 147, 191, 200, 76, 39, 227]),
    e(13, 23, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(14, 1, [53, 275, 165, 11, 162, 186, 21, 38]),
    e(14, 6, [99, 365, 316, 201, 59, 98, 33, 106]),
    e(14, 11, [72, 371, 85, 85, 252, 2, 78, 120]),
    e(14, 13, [136, 318, 39, 110, 155, 135, 132, 216]),
    e(14, 24, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(15, 0, [36, 262, 33, 159, 114, 103, 143, 227]),
    e(15, 10, [49, 119, 292, 174, 144, 67, 123, 6]),
    e(15, 11, [46, 300, 297, 121, 251, 317, 43, 204]),
    e(15, 25, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(16, 1, [53, 364, 217, 135, 129, 190, 44, 80]),
    e(16, 9, [7, 343, 30, 52, 178, 224, 27, 16]),
    e(16, 11, [27, 317, 16, 138, 161, 48, 61, 137]),
    e(16, 12, [196, 20, 35, 68, 207, 179, 82, 95]),
    e(16, 26, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(17, 1, [212, 102, 221, 9, 186, 20, 124, 52]),
    e(17, 5, [39, 16, 146, 89, 102, 342, 80, 237]),
    e(17, 11, [51, 218, 154, 164, 84, 146, 14, 237]),
    e(17, 12, [255, 219, 58, 187, 143, 302, 41, 128]),
    e(17, 27, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(18, 0, [6, 310, 101, 215, 79, 291, 197, 227]),
    e(18, 6, [195, 131, 103, 51, 153, 203, 30, 36]),
    e(18, 7, [101, 313, 179, 206, 63, 332, 139, 222]),
    e(18, 28, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(19, 0, [38, 295, 189, 7, 254, 206, 151, 61]),
    e(19, 1, [96, 106, 138, 113, 98, 298, 172, 47]),
    e(19, 10, [52, 383, 177, 41, 243, 131, 153, 186]),
    e(19, 29, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(20, 1, [229, 337, 225, 16, 155, 340, 47, 125]),
    e(20, 4, [149, 89, 215, 96, 171, 30, 21, 138]),
    e(20, 11, [133, 42, 97, 219, 55, 160, 58, 157]),
    e(20, 30, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(21, 0, [62, 349, 86, 98, 287, 170, 34, 116]),
    e(21, 8, [248, 151, 1, 208, 131, 345, 44, 190]),
    e(21, 13, [192, 56, 218, 8, 194, 203, 25, 112]),
    e(21, 31, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(22, 1, [121, 155, 11, 130, 260, 351, 173, 148]),
    e(22, 2, [29, 143, 77, 110, 75, 231, 11, 89]),
    e(22, 32, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(23, 0, [15, 12, 242, 143, 243, 276, 116, 226]),
    e(23, 3, [150, 100, 79, 122, 63, 80, 162, 45]),
    e(23, 5, [114, 288, 63, 104, 138, 119, 24, 130]),
    e(23, 33, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(24, 1, [52, 9, 251, 166, 275, 304, 125, 1]),
    e(24, 2, [20, 268, 219, 131, 242, 188, 174, 66]),
    e(24, 9, [63, 62, 261, 3, 43, 314, 99, 239]),
    e(24, 34, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(25, 0, [124, 54, 89, 53, 185, 223, 53, 153]),
    e(25, 5, [66, 141, 232, 120, 108, 157, 198, 130]),
    e(25, 35, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(26, 2, [159, 16, 183, 172, 136, 261, 82, 114]),
    e(26, 7, [104, 281, 280, 46, 222, 37, 49, 141]),
    e(26, 12, [44, 193, 318, 110, 94, 313, 33, 233]),
    e(26, 13, [154, 377, 294, 43, 109, 252, 72, 116]),
    e(26, 36, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(27, 0, [54, 34, 52, 42, 129, 214, 205, 59]),
    e(27, 6, [140, 260, 10, 109, 201, 37, 52, 104]),
    e(27, 37, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(28, 1, [39, 29, 134, 14, 213, 183, 76, 25]),
    e(28, 2, [49, 131, 169, 39, 83, 274, 155, 73]),
    e(28, 5, [239, 230, 285, 125, 112, 191, 200, 86]),
    e(28, 38, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(29, 0, [222, 372, 78, 94, 113, 288, 68, 165]),
    e(29, 4, [0, 180, 154, 33, 176, 163, 79, 53]),
    e(29, 39, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(30, 2, [75, 138, 113, 206, 140, 141, 77, 114]),
    e(30, 5, [84, 331, 39, 41, 13, 324, 67, 162]),
    e(30, 7, [151, 80, 122, 216, 202, 153, 123, 46]),
    e(30, 9, [137, 295, 255, 47, 158, 232, 141, 236]),
    e(30, 40, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(31, 1, [153, 170, 130, 20, 72, 323, 99, 148]),
    e(31, 13, [217, 380, 272, 191, 67, 162, 173, 217]),
    e(31, 41, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(32, 0, [119, 343, 261, 107, 235, 190, 141, 68]),
    e(32, 5, [206, 374, 169, 19, 149, 328, 204, 180]),
    e(32, 12, [95, 65, 300, 207, 44, 323, 154, 210]),
    e(32, 42, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(33, 2, [188, 81, 47, 125, 231, 232, 196, 207]),
    e(33, 7, [96, 134, 11, 178, 185, 324, 158, 31]),
    e(33, 10, [227, 161, 107, 182, 51, 228, 131, 225]),
    e(33, 43, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(34, 0, [245, 239, 145, 223, 196, 198, 117, 206]),
    e(34, 12, [227, 176, 269, 170, 85, 300, 20, 147]),
    e(34, 13, [142, 93, 123, 75, 240, 95, 46, 176]),
    e(34, 44, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(35, 1, [250, 75, 235, 78, 232, 74, 88, 110]),
    e(35, 5, [105, 310, 12, 63, 203, 216, 63, 28]),
    e(35, 11, [82, 102, 256, 158, 256, 3, 163, 114]),
    e(35, 45, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(36, 0, [239, 85, 52, 31, 221, 164, 138, 166]),
    e(36, 2, [224, 223, 22, 175, 33, 72, 204, 1]),
    e(36, 7, [168, 301, 223, 138, 94, 231, 9, 88]),
    e(36, 46, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(37, 10, [141, 272, 263, 159, 63, 33, 85, 116]),
    e(37, 13, [143, 239, 152, 136, 226, 87, 134, 155]),
    e(37, 47, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(38, 1, [57, 179, 23, 163, 244, 314, 71, 30]),
    e(38, 5, [189, 98, 149, 22, 1, 190, 12, 4]),
    e(38, 11, [36, 0, 154, 114, 273, 338, 81, 219]),
    e(38, 48, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(39, 0, [55, 48, 265, 213, 12, 118, 79, 191]),
    e(39, 7, [18, 272, 49, 179, 286, 80, 157, 10]),
    e(39, 12, [172, 30, 216, 13, 258, 167, 20, 54]),
    e(39, 49, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(40, 2, [248, 125, 119, 38, 62, 311, 138, 204]),
    e(40, 10, [130, 344, 42, 103, 129, 161, 200, 42]),
    e(40, 13, [25, 191, 206, 178, 54, 181, 71, 10]),
    e(40, 50, [0, 0, 0, 0, 0, 0, 0, 0]),

    e(41, 1, [170, 343, 277, 160, 31, 195, 116, 117]),
    e(41, 5, [77, 79, 21, 80, 210, 71, 31, 32]),
    e(41, 11, [92, 125, 76, 118, 69, 104, 150, 188]),
    e(41, 51, [0, 0, 0, 0, 0, 0, 0, 0]),
];
