// Comparator lists for the sorting network bank, one per input size.
// Sizes 2 to 10, 12 and 13 use optimal networks; sizes 11 and 14 to 20 are
// Batcher merge networks with redundant comparators removed, the rest are
// plain Batcher odd-even merge networks truncated to the input size.

const SORT_2: &[(u8, u8)] = &[
    (0, 1),
];

const SORT_3: &[(u8, u8)] = &[
    (0, 2), (0, 1), (1, 2),
];

const SORT_4: &[(u8, u8)] = &[
    (0, 2), (1, 3), (0, 1), (2, 3), (1, 2),
];

const SORT_5: &[(u8, u8)] = &[
    (0, 3), (1, 4), (0, 2), (1, 3), (0, 1), (2, 4), (1, 2), (3, 4),
    (2, 3),
];

const SORT_6: &[(u8, u8)] = &[
    (0, 5), (1, 3), (2, 4), (1, 2), (3, 4), (0, 3), (2, 5), (0, 1),
    (2, 3), (4, 5), (1, 2), (3, 4),
];

const SORT_7: &[(u8, u8)] = &[
    (0, 6), (2, 3), (4, 5), (0, 2), (1, 4), (3, 6), (0, 1), (2, 5),
    (3, 4), (1, 2), (4, 6), (2, 3), (4, 5), (1, 2), (3, 4), (5, 6),
];

const SORT_8: &[(u8, u8)] = &[
    (0, 2), (1, 3), (4, 6), (5, 7), (0, 4), (1, 5), (2, 6), (3, 7),
    (0, 1), (2, 3), (4, 5), (6, 7), (2, 4), (3, 5), (1, 4), (3, 6),
    (1, 2), (3, 4), (5, 6),
];

const SORT_9: &[(u8, u8)] = &[
    (0, 3), (1, 7), (2, 5), (4, 8), (0, 7), (2, 4), (3, 8), (5, 6),
    (0, 2), (1, 3), (4, 5), (7, 8), (1, 4), (3, 6), (5, 7), (0, 1),
    (2, 4), (3, 5), (6, 8), (2, 3), (4, 5), (6, 7), (1, 2), (3, 4),
    (5, 6),
];

const SORT_10: &[(u8, u8)] = &[
    (0, 8), (1, 9), (2, 7), (3, 5), (4, 6), (0, 2), (1, 4), (5, 8),
    (7, 9), (0, 3), (2, 4), (5, 7), (6, 9), (0, 1), (3, 6), (8, 9),
    (1, 5), (2, 3), (4, 8), (6, 7), (1, 2), (3, 5), (4, 6), (7, 8),
    (2, 3), (4, 5), (6, 7), (3, 4), (5, 6),
];

const SORT_11: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (0, 2), (1, 3), (4, 6),
    (5, 7), (8, 10), (1, 2), (5, 6), (0, 4), (1, 5), (2, 6), (3, 7),
    (2, 4), (3, 5), (1, 2), (3, 4), (5, 6), (9, 10), (0, 8), (1, 9),
    (2, 10), (4, 8), (5, 9), (6, 10), (2, 4), (3, 5), (6, 8), (7, 9),
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10),
];

const SORT_12: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (1, 3), (5, 7),
    (9, 11), (0, 2), (4, 6), (8, 10), (1, 2), (5, 6), (9, 10), (1, 5),
    (6, 10), (5, 9), (2, 6), (1, 5), (6, 10), (0, 4), (7, 11), (3, 7),
    (4, 8), (0, 4), (7, 11), (1, 4), (7, 10), (3, 8), (2, 3), (8, 9),
    (2, 4), (7, 9), (3, 5), (6, 8), (3, 4), (5, 6), (7, 8),
];

const SORT_13: &[(u8, u8)] = &[
    (0, 12), (1, 10), (2, 9), (3, 7), (5, 11), (6, 8), (1, 6), (2, 3),
    (4, 11), (7, 9), (8, 10), (0, 4), (1, 2), (3, 6), (7, 8), (9, 10),
    (11, 12), (4, 6), (5, 9), (8, 11), (10, 12), (0, 5), (3, 8), (4, 7),
    (6, 11), (9, 10), (0, 1), (2, 5), (6, 9), (7, 8), (10, 11), (1, 3),
    (2, 4), (5, 6), (9, 10), (1, 2), (3, 4), (5, 7), (6, 8), (2, 3),
    (4, 5), (6, 7), (8, 9), (3, 4), (5, 6),
];

const SORT_14: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (0, 2),
    (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (1, 2), (5, 6), (9, 10),
    (0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (2, 4), (3, 5),
    (10, 12), (11, 13), (1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (0, 8),
    (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (4, 8), (5, 9), (6, 10),
    (7, 11), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (1, 2),
    (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
];

const SORT_15: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (0, 2),
    (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (1, 2), (5, 6),
    (9, 10), (13, 14), (0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13),
    (10, 14), (2, 4), (3, 5), (10, 12), (11, 13), (1, 2), (3, 4), (5, 6),
    (9, 10), (11, 12), (13, 14), (0, 8), (1, 9), (2, 10), (3, 11), (4, 12),
    (5, 13), (6, 14), (4, 8), (5, 9), (6, 10), (7, 11), (2, 4), (3, 5),
    (6, 8), (7, 9), (10, 12), (11, 13), (1, 2), (3, 4), (5, 6), (7, 8),
    (9, 10), (11, 12), (13, 14),
];

const SORT_16: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
    (1, 2), (5, 6), (9, 10), (13, 14), (0, 4), (1, 5), (2, 6), (3, 7),
    (8, 12), (9, 13), (10, 14), (11, 15), (2, 4), (3, 5), (10, 12), (11, 13),
    (1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14), (0, 8), (1, 9),
    (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (4, 8), (5, 9),
    (6, 10), (7, 11), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13),
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14),
];

const SORT_17: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
    (1, 2), (5, 6), (9, 10), (13, 14), (0, 4), (1, 5), (2, 6), (3, 7),
    (8, 12), (9, 13), (10, 14), (11, 15), (2, 4), (3, 5), (10, 12), (11, 13),
    (1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14), (0, 8), (1, 9),
    (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (4, 8), (5, 9),
    (6, 10), (7, 11), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13),
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (0, 16),
    (8, 16), (4, 8), (12, 16), (2, 4), (6, 8), (10, 12), (14, 16), (1, 2),
    (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
];

const SORT_18: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14),
    (13, 15), (1, 2), (5, 6), (9, 10), (13, 14), (0, 4), (1, 5), (2, 6),
    (3, 7), (8, 12), (9, 13), (10, 14), (11, 15), (2, 4), (3, 5), (10, 12),
    (11, 13), (1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14), (0, 8),
    (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (4, 8),
    (5, 9), (6, 10), (7, 11), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12),
    (11, 13), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14),
    (0, 16), (1, 17), (8, 16), (9, 17), (4, 8), (5, 9), (12, 16), (13, 17),
    (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
];

const SORT_19: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14),
    (13, 15), (16, 18), (1, 2), (5, 6), (9, 10), (13, 14), (0, 4), (1, 5),
    (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15), (2, 4), (3, 5),
    (10, 12), (11, 13), (1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14),
    (0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
    (4, 8), (5, 9), (6, 10), (7, 11), (2, 4), (3, 5), (6, 8), (7, 9),
    (10, 12), (11, 13), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
    (13, 14), (17, 18), (0, 16), (1, 17), (2, 18), (8, 16), (9, 17), (10, 18),
    (4, 8), (5, 9), (6, 10), (12, 16), (13, 17), (14, 18), (2, 4), (3, 5),
    (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17), (1, 2), (3, 4),
    (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18),
];

const SORT_20: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11),
    (12, 14), (13, 15), (16, 18), (17, 19), (1, 2), (5, 6), (9, 10), (13, 14),
    (0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
    (2, 4), (3, 5), (10, 12), (11, 13), (1, 2), (3, 4), (5, 6), (9, 10),
    (11, 12), (13, 14), (0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13),
    (6, 14), (7, 15), (4, 8), (5, 9), (6, 10), (7, 11), (2, 4), (3, 5),
    (6, 8), (7, 9), (10, 12), (11, 13), (1, 2), (3, 4), (5, 6), (7, 8),
    (9, 10), (11, 12), (13, 14), (17, 18), (0, 16), (1, 17), (2, 18), (3, 19),
    (8, 16), (9, 17), (10, 18), (11, 19), (4, 8), (5, 9), (6, 10), (7, 11),
    (12, 16), (13, 17), (14, 18), (15, 19), (2, 4), (3, 5), (6, 8), (7, 9),
    (10, 12), (11, 13), (14, 16), (15, 17), (1, 2), (3, 4), (5, 6), (7, 8),
    (9, 10), (11, 12), (13, 14), (15, 16), (17, 18),
];

const SORT_21: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11),
    (12, 14), (13, 15), (16, 18), (17, 19), (1, 2), (5, 6), (9, 10), (13, 14),
    (17, 18), (0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14),
    (11, 15), (16, 20), (2, 4), (3, 5), (10, 12), (11, 13), (18, 20), (1, 2),
    (3, 4), (5, 6), (9, 10), (11, 12), (13, 14), (17, 18), (19, 20), (0, 8),
    (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (4, 8),
    (5, 9), (6, 10), (7, 11), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12),
    (11, 13), (18, 20), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
    (13, 14), (17, 18), (19, 20), (0, 16), (1, 17), (2, 18), (3, 19), (4, 20),
    (8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (4, 8), (5, 9), (6, 10),
    (7, 11), (12, 16), (13, 17), (14, 18), (15, 19), (2, 4), (3, 5), (6, 8),
    (7, 9), (10, 12), (11, 13), (14, 16), (15, 17), (18, 20), (1, 2), (3, 4),
    (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20),
];

const SORT_22: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (20, 21), (0, 2), (1, 3), (4, 6), (5, 7), (8, 10),
    (9, 11), (12, 14), (13, 15), (16, 18), (17, 19), (1, 2), (5, 6), (9, 10),
    (13, 14), (17, 18), (0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13),
    (10, 14), (11, 15), (16, 20), (17, 21), (2, 4), (3, 5), (10, 12), (11, 13),
    (18, 20), (19, 21), (1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14),
    (17, 18), (19, 20), (0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13),
    (6, 14), (7, 15), (4, 8), (5, 9), (6, 10), (7, 11), (2, 4), (3, 5),
    (6, 8), (7, 9), (10, 12), (11, 13), (18, 20), (19, 21), (1, 2), (3, 4),
    (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (17, 18), (19, 20), (0, 16),
    (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (8, 16), (9, 17), (10, 18),
    (11, 19), (12, 20), (13, 21), (4, 8), (5, 9), (6, 10), (7, 11), (12, 16),
    (13, 17), (14, 18), (15, 19), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12),
    (11, 13), (14, 16), (15, 17), (18, 20), (19, 21), (1, 2), (3, 4), (5, 6),
    (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20),
];

const SORT_23: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (20, 21), (0, 2), (1, 3), (4, 6), (5, 7), (8, 10),
    (9, 11), (12, 14), (13, 15), (16, 18), (17, 19), (20, 22), (1, 2), (5, 6),
    (9, 10), (13, 14), (17, 18), (21, 22), (0, 4), (1, 5), (2, 6), (3, 7),
    (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21), (18, 22), (2, 4),
    (3, 5), (10, 12), (11, 13), (18, 20), (19, 21), (1, 2), (3, 4), (5, 6),
    (9, 10), (11, 12), (13, 14), (17, 18), (19, 20), (21, 22), (0, 8), (1, 9),
    (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (4, 8), (5, 9),
    (6, 10), (7, 11), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13),
    (18, 20), (19, 21), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
    (13, 14), (17, 18), (19, 20), (21, 22), (0, 16), (1, 17), (2, 18), (3, 19),
    (4, 20), (5, 21), (6, 22), (8, 16), (9, 17), (10, 18), (11, 19), (12, 20),
    (13, 21), (14, 22), (4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17),
    (14, 18), (15, 19), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13),
    (14, 16), (15, 17), (18, 20), (19, 21), (1, 2), (3, 4), (5, 6), (7, 8),
    (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22),
];

const SORT_24: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (20, 21), (22, 23), (0, 2), (1, 3), (4, 6), (5, 7),
    (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19), (20, 22), (21, 23),
    (1, 2), (5, 6), (9, 10), (13, 14), (17, 18), (21, 22), (0, 4), (1, 5),
    (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21),
    (18, 22), (19, 23), (2, 4), (3, 5), (10, 12), (11, 13), (18, 20), (19, 21),
    (1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14), (17, 18), (19, 20),
    (21, 22), (0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14),
    (7, 15), (4, 8), (5, 9), (6, 10), (7, 11), (2, 4), (3, 5), (6, 8),
    (7, 9), (10, 12), (11, 13), (18, 20), (19, 21), (1, 2), (3, 4), (5, 6),
    (7, 8), (9, 10), (11, 12), (13, 14), (17, 18), (19, 20), (21, 22), (0, 16),
    (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23), (8, 16),
    (9, 17), (10, 18), (11, 19), (12, 20), (13, 21), (14, 22), (15, 23), (4, 8),
    (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19), (2, 4),
    (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17), (18, 20),
    (19, 21), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14),
    (15, 16), (17, 18), (19, 20), (21, 22),
];

const SORT_25: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (20, 21), (22, 23), (0, 2), (1, 3), (4, 6), (5, 7),
    (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19), (20, 22), (21, 23),
    (1, 2), (5, 6), (9, 10), (13, 14), (17, 18), (21, 22), (0, 4), (1, 5),
    (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21),
    (18, 22), (19, 23), (2, 4), (3, 5), (10, 12), (11, 13), (18, 20), (19, 21),
    (1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14), (17, 18), (19, 20),
    (21, 22), (0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14),
    (7, 15), (16, 24), (4, 8), (5, 9), (6, 10), (7, 11), (20, 24), (2, 4),
    (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (18, 20), (19, 21), (22, 24),
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (17, 18),
    (19, 20), (21, 22), (23, 24), (0, 16), (1, 17), (2, 18), (3, 19), (4, 20),
    (5, 21), (6, 22), (7, 23), (8, 24), (8, 16), (9, 17), (10, 18), (11, 19),
    (12, 20), (13, 21), (14, 22), (15, 23), (4, 8), (5, 9), (6, 10), (7, 11),
    (12, 16), (13, 17), (14, 18), (15, 19), (20, 24), (2, 4), (3, 5), (6, 8),
    (7, 9), (10, 12), (11, 13), (14, 16), (15, 17), (18, 20), (19, 21), (22, 24),
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
    (17, 18), (19, 20), (21, 22), (23, 24),
];

const SORT_26: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (0, 2), (1, 3), (4, 6),
    (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19), (20, 22),
    (21, 23), (1, 2), (5, 6), (9, 10), (13, 14), (17, 18), (21, 22), (0, 4),
    (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20),
    (17, 21), (18, 22), (19, 23), (2, 4), (3, 5), (10, 12), (11, 13), (18, 20),
    (19, 21), (1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14), (17, 18),
    (19, 20), (21, 22), (0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13),
    (6, 14), (7, 15), (16, 24), (17, 25), (4, 8), (5, 9), (6, 10), (7, 11),
    (20, 24), (21, 25), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13),
    (18, 20), (19, 21), (22, 24), (23, 25), (1, 2), (3, 4), (5, 6), (7, 8),
    (9, 10), (11, 12), (13, 14), (17, 18), (19, 20), (21, 22), (23, 24), (0, 16),
    (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23), (8, 24),
    (9, 25), (8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21), (14, 22),
    (15, 23), (4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18),
    (15, 19), (20, 24), (21, 25), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12),
    (11, 13), (14, 16), (15, 17), (18, 20), (19, 21), (22, 24), (23, 25), (1, 2),
    (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18),
    (19, 20), (21, 22), (23, 24),
];

const SORT_27: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (0, 2), (1, 3), (4, 6),
    (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19), (20, 22),
    (21, 23), (24, 26), (1, 2), (5, 6), (9, 10), (13, 14), (17, 18), (21, 22),
    (25, 26), (0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14),
    (11, 15), (16, 20), (17, 21), (18, 22), (19, 23), (2, 4), (3, 5), (10, 12),
    (11, 13), (18, 20), (19, 21), (1, 2), (3, 4), (5, 6), (9, 10), (11, 12),
    (13, 14), (17, 18), (19, 20), (21, 22), (25, 26), (0, 8), (1, 9), (2, 10),
    (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (16, 24), (17, 25), (18, 26),
    (4, 8), (5, 9), (6, 10), (7, 11), (20, 24), (21, 25), (22, 26), (2, 4),
    (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (18, 20), (19, 21), (22, 24),
    (23, 25), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14),
    (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (0, 16), (1, 17), (2, 18),
    (3, 19), (4, 20), (5, 21), (6, 22), (7, 23), (8, 24), (9, 25), (10, 26),
    (8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21), (14, 22), (15, 23),
    (4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19),
    (20, 24), (21, 25), (22, 26), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12),
    (11, 13), (14, 16), (15, 17), (18, 20), (19, 21), (22, 24), (23, 25), (1, 2),
    (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18),
    (19, 20), (21, 22), (23, 24), (25, 26),
];

const SORT_28: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (0, 2), (1, 3),
    (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19),
    (20, 22), (21, 23), (24, 26), (25, 27), (1, 2), (5, 6), (9, 10), (13, 14),
    (17, 18), (21, 22), (25, 26), (0, 4), (1, 5), (2, 6), (3, 7), (8, 12),
    (9, 13), (10, 14), (11, 15), (16, 20), (17, 21), (18, 22), (19, 23), (2, 4),
    (3, 5), (10, 12), (11, 13), (18, 20), (19, 21), (1, 2), (3, 4), (5, 6),
    (9, 10), (11, 12), (13, 14), (17, 18), (19, 20), (21, 22), (25, 26), (0, 8),
    (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (16, 24),
    (17, 25), (18, 26), (19, 27), (4, 8), (5, 9), (6, 10), (7, 11), (20, 24),
    (21, 25), (22, 26), (23, 27), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12),
    (11, 13), (18, 20), (19, 21), (22, 24), (23, 25), (1, 2), (3, 4), (5, 6),
    (7, 8), (9, 10), (11, 12), (13, 14), (17, 18), (19, 20), (21, 22), (23, 24),
    (25, 26), (0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22),
    (7, 23), (8, 24), (9, 25), (10, 26), (11, 27), (8, 16), (9, 17), (10, 18),
    (11, 19), (12, 20), (13, 21), (14, 22), (15, 23), (4, 8), (5, 9), (6, 10),
    (7, 11), (12, 16), (13, 17), (14, 18), (15, 19), (20, 24), (21, 25), (22, 26),
    (23, 27), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16),
    (15, 17), (18, 20), (19, 21), (22, 24), (23, 25), (1, 2), (3, 4), (5, 6),
    (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22),
    (23, 24), (25, 26),
];

const SORT_29: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (0, 2), (1, 3),
    (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19),
    (20, 22), (21, 23), (24, 26), (25, 27), (1, 2), (5, 6), (9, 10), (13, 14),
    (17, 18), (21, 22), (25, 26), (0, 4), (1, 5), (2, 6), (3, 7), (8, 12),
    (9, 13), (10, 14), (11, 15), (16, 20), (17, 21), (18, 22), (19, 23), (24, 28),
    (2, 4), (3, 5), (10, 12), (11, 13), (18, 20), (19, 21), (26, 28), (1, 2),
    (3, 4), (5, 6), (9, 10), (11, 12), (13, 14), (17, 18), (19, 20), (21, 22),
    (25, 26), (27, 28), (0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13),
    (6, 14), (7, 15), (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (4, 8),
    (5, 9), (6, 10), (7, 11), (20, 24), (21, 25), (22, 26), (23, 27), (2, 4),
    (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (18, 20), (19, 21), (22, 24),
    (23, 25), (26, 28), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
    (13, 14), (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28), (0, 16),
    (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23), (8, 24),
    (9, 25), (10, 26), (11, 27), (12, 28), (8, 16), (9, 17), (10, 18), (11, 19),
    (12, 20), (13, 21), (14, 22), (15, 23), (4, 8), (5, 9), (6, 10), (7, 11),
    (12, 16), (13, 17), (14, 18), (15, 19), (20, 24), (21, 25), (22, 26), (23, 27),
    (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
    (18, 20), (19, 21), (22, 24), (23, 25), (26, 28), (1, 2), (3, 4), (5, 6),
    (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22),
    (23, 24), (25, 26), (27, 28),
];

const SORT_30: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (0, 2),
    (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18),
    (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (1, 2), (5, 6), (9, 10),
    (13, 14), (17, 18), (21, 22), (25, 26), (0, 4), (1, 5), (2, 6), (3, 7),
    (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21), (18, 22), (19, 23),
    (24, 28), (25, 29), (2, 4), (3, 5), (10, 12), (11, 13), (18, 20), (19, 21),
    (26, 28), (27, 29), (1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14),
    (17, 18), (19, 20), (21, 22), (25, 26), (27, 28), (0, 8), (1, 9), (2, 10),
    (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (16, 24), (17, 25), (18, 26),
    (19, 27), (20, 28), (21, 29), (4, 8), (5, 9), (6, 10), (7, 11), (20, 24),
    (21, 25), (22, 26), (23, 27), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12),
    (11, 13), (18, 20), (19, 21), (22, 24), (23, 25), (26, 28), (27, 29), (1, 2),
    (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (17, 18), (19, 20),
    (21, 22), (23, 24), (25, 26), (27, 28), (0, 16), (1, 17), (2, 18), (3, 19),
    (4, 20), (5, 21), (6, 22), (7, 23), (8, 24), (9, 25), (10, 26), (11, 27),
    (12, 28), (13, 29), (8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21),
    (14, 22), (15, 23), (4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17),
    (14, 18), (15, 19), (20, 24), (21, 25), (22, 26), (23, 27), (2, 4), (3, 5),
    (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17), (18, 20), (19, 21),
    (22, 24), (23, 25), (26, 28), (27, 29), (1, 2), (3, 4), (5, 6), (7, 8),
    (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22), (23, 24),
    (25, 26), (27, 28),
];

const SORT_31: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (0, 2),
    (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18),
    (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (1, 2), (5, 6),
    (9, 10), (13, 14), (17, 18), (21, 22), (25, 26), (29, 30), (0, 4), (1, 5),
    (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21),
    (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (2, 4), (3, 5), (10, 12),
    (11, 13), (18, 20), (19, 21), (26, 28), (27, 29), (1, 2), (3, 4), (5, 6),
    (9, 10), (11, 12), (13, 14), (17, 18), (19, 20), (21, 22), (25, 26), (27, 28),
    (29, 30), (0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14),
    (7, 15), (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29), (22, 30),
    (4, 8), (5, 9), (6, 10), (7, 11), (20, 24), (21, 25), (22, 26), (23, 27),
    (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (18, 20), (19, 21),
    (22, 24), (23, 25), (26, 28), (27, 29), (1, 2), (3, 4), (5, 6), (7, 8),
    (9, 10), (11, 12), (13, 14), (17, 18), (19, 20), (21, 22), (23, 24), (25, 26),
    (27, 28), (29, 30), (0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21),
    (6, 22), (7, 23), (8, 24), (9, 25), (10, 26), (11, 27), (12, 28), (13, 29),
    (14, 30), (8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21), (14, 22),
    (15, 23), (4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18),
    (15, 19), (20, 24), (21, 25), (22, 26), (23, 27), (2, 4), (3, 5), (6, 8),
    (7, 9), (10, 12), (11, 13), (14, 16), (15, 17), (18, 20), (19, 21), (22, 24),
    (23, 25), (26, 28), (27, 29), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10),
    (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22), (23, 24), (25, 26),
    (27, 28), (29, 30),
];

const SORT_32: &[(u8, u8)] = &[
    (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
    (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
    (0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
    (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31),
    (1, 2), (5, 6), (9, 10), (13, 14), (17, 18), (21, 22), (25, 26), (29, 30),
    (0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
    (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31),
    (2, 4), (3, 5), (10, 12), (11, 13), (18, 20), (19, 21), (26, 28), (27, 29),
    (1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14), (17, 18), (19, 20),
    (21, 22), (25, 26), (27, 28), (29, 30), (0, 8), (1, 9), (2, 10), (3, 11),
    (4, 12), (5, 13), (6, 14), (7, 15), (16, 24), (17, 25), (18, 26), (19, 27),
    (20, 28), (21, 29), (22, 30), (23, 31), (4, 8), (5, 9), (6, 10), (7, 11),
    (20, 24), (21, 25), (22, 26), (23, 27), (2, 4), (3, 5), (6, 8), (7, 9),
    (10, 12), (11, 13), (18, 20), (19, 21), (22, 24), (23, 25), (26, 28), (27, 29),
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (17, 18),
    (19, 20), (21, 22), (23, 24), (25, 26), (27, 28), (29, 30), (0, 16), (1, 17),
    (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23), (8, 24), (9, 25),
    (10, 26), (11, 27), (12, 28), (13, 29), (14, 30), (15, 31), (8, 16), (9, 17),
    (10, 18), (11, 19), (12, 20), (13, 21), (14, 22), (15, 23), (4, 8), (5, 9),
    (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19), (20, 24), (21, 25),
    (22, 26), (23, 27), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13),
    (14, 16), (15, 17), (18, 20), (19, 21), (22, 24), (23, 25), (26, 28), (27, 29),
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
    (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28), (29, 30),
];

pub(crate) static NETWORKS: [&[(u8, u8)]; 33] = [
    &[], &[], SORT_2, SORT_3, SORT_4, SORT_5,
    SORT_6, SORT_7, SORT_8, SORT_9, SORT_10, SORT_11,
    SORT_12, SORT_13, SORT_14, SORT_15, SORT_16, SORT_17,
    SORT_18, SORT_19, SORT_20, SORT_21, SORT_22, SORT_23,
    SORT_24, SORT_25, SORT_26, SORT_27, SORT_28, SORT_29,
    SORT_30, SORT_31, SORT_32,
];
