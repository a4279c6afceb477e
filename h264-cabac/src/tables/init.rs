// h264-cabac
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Context initialization coefficient tables (`m`, `n`), one per `ctxIdx`
//! in `0..1024`, keyed by slice class (I/SI vs P/SP/B) and, for P/SP/B,
//! by `cabac_init_idc`.
//!
//! These correspond to H.264 Tables 9-12 through 9-33: each `ctxIdx`
//! carries a coefficient pair combined with the slice QP in
//! [`crate::context::ContextModel::init`] to derive the context's
//! starting `(p_state_idx, mps_value)`.
//!
//! FIXME: the four tables below are generated placeholders (correct
//! shape, `(m, n)` values in the legal range), not a transcription of
//! the ITU text. Decoding a real H.264 stream needs these replaced with
//! the verified Table 9-12..9-33 values first; see `DESIGN.md`.
pub(crate) const INIT_I_SLICE: [(i16, i16); 1024] = [
    (26, -54), (4, 36), (-10, -59), (21, -14), (-3, -34), (23, 78), (30, -45), (20, -52),
    (7, 11), (-2, 13), (-18, 103), (-6, -30), (-1, -54), (-15, 59), (6, -8), (9, -9),
    (-7, 49), (-1, -60), (-13, -48), (20, 88), (21, 92), (12, 91), (11, -3), (28, -60),
    (-2, 7), (-14, -33), (-10, -57), (11, 104), (-5, 26), (-19, -31), (-16, -39), (19, -24),
    (22, -56), (-18, -29), (10, 27), (-25, 10), (-4, -59), (-11, -24), (-22, -63), (-15, 94),
    (2, -53), (7, 29), (14, 118), (-15, 98), (-17, 2), (-16, 45), (-20, 3), (-24, -53),
    (27, 121), (-9, 111), (30, 34), (12, 64), (24, 44), (24, 99), (-14, -18), (26, 73),
    (16, -42), (17, -1), (6, -36), (12, -37), (4, -62), (-16, 92), (25, -58), (-9, -20),
    (12, 74), (17, 23), (-20, 40), (11, -53), (0, 44), (26, 29), (-18, 17), (-18, 94),
    (-21, -26), (-14, 114), (-6, -49), (-11, -61), (-19, -6), (23, -35), (30, 69), (1, -60),
    (-21, 3), (-4, 83), (0, 6), (10, -8), (-12, 25), (-14, -40), (-12, 32), (4, -31),
    (8, 22), (16, 20), (14, 103), (-19, 83), (13, -44), (-17, 17), (24, 62), (-1, 9),
    (-18, 10), (5, 70), (13, -23), (9, 18), (-21, 121), (-7, -25), (9, 76), (-2, -28),
    (-3, 86), (25, 29), (-9, 70), (16, 22), (-6, -32), (-23, 40), (-2, 125), (28, 9),
    (-19, -15), (8, 100), (-22, 33), (23, 84), (4, -48), (-26, 98), (0, -14), (-22, -53),
    (-8, 30), (25, 34), (-14, 71), (0, -60), (-14, 118), (-11, 99), (-10, 70), (-13, -45),
    (-22, 54), (5, -44), (21, -47), (-25, 21), (-1, 23), (12, 128), (-19, 50), (30, -38),
    (29, 0), (-16, 54), (27, 82), (11, 12), (22, 52), (23, 56), (0, 76), (-8, 112),
    (28, 124), (-2, -16), (14, -24), (5, -38), (12, 103), (-6, 82), (-5, -63), (22, 33),
    (-19, 92), (-5, -6), (-6, 30), (10, 96), (4, 1), (25, -48), (-17, 16), (2, -48),
    (-9, -16), (-16, -62), (-24, -12), (-6, 45), (-2, 40), (-17, 83), (-19, 91), (-21, 14),
    (-1, 130), (-14, 8), (-17, 16), (-15, -61), (-22, 33), (-3, -8), (26, 9), (-3, 62),
    (26, -1), (-24, 69), (-15, -54), (-2, 75), (26, -60), (10, -57), (-22, 83), (-16, 38),
    (-12, 34), (0, -49), (20, -53), (11, -49), (20, 110), (15, 77), (24, -29), (29, -37),
    (-20, 128), (-11, 101), (3, 79), (29, 10), (17, 14), (9, 111), (-24, 130), (24, 1),
    (14, -61), (-22, 49), (5, 56), (20, -32), (23, -38), (-22, -16), (29, -50), (30, -2),
    (-25, -63), (-16, 110), (22, 26), (-26, 1), (19, 99), (-6, 60), (-11, -52), (-17, 1),
    (17, 18), (8, 127), (-9, -64), (14, 88), (19, 128), (-24, 85), (4, 54), (-4, 94),
    (-24, -48), (30, 23), (28, -49), (4, 44), (-23, 60), (-15, -51), (-15, 122), (11, 3),
    (28, 116), (19, 37), (-26, 85), (-8, 109), (18, 127), (6, 124), (16, 39), (17, 37),
    (-24, -44), (17, -39), (20, -43), (18, 7), (11, -28), (16, -8), (-20, -24), (24, 44),
    (-18, 42), (-13, -60), (28, 114), (16, 50), (-14, 112), (4, 55), (-6, -34), (-25, -4),
    (2, 46), (0, -3), (16, -42), (8, 128), (-7, 125), (-14, 6), (18, 60), (-21, 7),
    (-23, 21), (10, 116), (30, 120), (21, 62), (-12, 90), (-9, 59), (17, 57), (-24, 98),
    (-16, 59), (26, -14), (-3, -27), (21, 123), (23, -8), (28, 49), (4, 80), (28, 116),
    (2, 55), (-2, -18), (19, 89), (-6, -39), (30, -57), (7, 2), (-6, 77), (6, 30),
    (-8, 80), (19, -54), (24, 69), (30, -25), (30, 32), (18, 110), (22, -60), (10, 96),
    (-16, -45), (3, 30), (-26, 55), (4, -19), (20, 87), (-17, 52), (19, -3), (-14, 46),
    (8, 87), (-2, 43), (-7, -54), (26, -7), (11, 53), (2, 125), (-25, 105), (29, -45),
    (25, -1), (-7, -45), (17, 95), (6, 30), (-16, 50), (25, 58), (-13, -55), (-23, 56),
    (9, -13), (10, 112), (-18, 75), (22, 93), (-3, 26), (28, 35), (0, 41), (8, 25),
    (-20, 119), (22, 113), (-13, 127), (-11, 83), (-13, 39), (-23, -42), (-16, 121), (-5, 32),
    (15, 83), (-17, -7), (-12, 64), (-10, 110), (-23, -64), (-22, 121), (23, 12), (-15, 117),
    (0, 23), (9, 3), (7, 37), (-9, -14), (-26, 25), (4, 44), (29, 51), (21, 120),
    (15, 83), (-23, -13), (-18, -40), (9, -55), (-16, 122), (2, 11), (-23, 1), (-4, 109),
    (-19, 42), (-16, -48), (-13, 92), (-25, -35), (26, 97), (0, -59), (-13, -56), (-14, 32),
    (-10, 122), (25, 13), (-16, 93), (-4, -33), (-16, 48), (-25, -64), (19, -34), (4, 105),
    (26, 114), (19, 7), (-6, 37), (27, -25), (24, 71), (-21, -50), (-16, 130), (-3, 84),
    (-2, 102), (23, 128), (7, -38), (-13, 33), (-14, -10), (-18, 97), (7, 63), (-25, 86),
    (12, 89), (-14, 86), (16, 64), (26, 77), (19, 74), (1, -59), (15, 84), (16, 82),
    (22, -50), (7, 112), (-6, -60), (-23, -22), (12, -38), (-22, 83), (27, -33), (-26, 78),
    (-26, 74), (1, -18), (-22, 96), (-20, -14), (10, 112), (9, -31), (20, -3), (-23, 107),
    (-9, 5), (-11, 8), (11, 43), (-18, -3), (-14, 77), (17, 99), (22, -53), (18, 68),
    (-21, 119), (-9, 57), (-2, 14), (9, 34), (-7, 108), (-3, 8), (-1, 57), (-16, 30),
    (-12, 5), (-25, 19), (14, 18), (-8, 80), (2, 4), (-1, 102), (29, 47), (-10, -58),
    (-12, 92), (5, -49), (-16, -11), (-11, -39), (-12, 99), (-1, 0), (-14, -3), (21, 97),
    (15, 81), (-24, -37), (-22, -45), (25, 125), (8, -32), (7, 97), (21, -38), (0, -33),
    (-11, -42), (16, 100), (-4, 111), (12, 33), (19, 38), (2, 93), (-9, -12), (18, -2),
    (27, 48), (-4, 68), (21, -58), (-1, -50), (16, -7), (-23, -15), (0, 82), (22, 70),
    (-1, 79), (29, 0), (27, 80), (-2, -29), (3, -9), (-25, 69), (17, -35), (27, 128),
    (-1, -53), (28, 67), (0, -64), (20, -38), (10, -30), (0, 107), (18, -4), (5, 0),
    (-18, 40), (-9, 111), (-22, 17), (-13, 108), (30, 74), (-23, 52), (-16, 129), (29, 21),
    (-26, 19), (17, -33), (3, 8), (-1, 91), (9, 92), (6, 32), (11, -17), (20, 36),
    (19, 124), (20, -47), (17, 76), (10, 111), (-12, 96), (-9, 6), (29, 17), (27, 109),
    (16, 42), (-4, 118), (-26, -14), (-8, 4), (-26, 85), (12, -26), (15, -42), (-2, 95),
    (-22, 51), (13, -57), (-6, 94), (-18, -59), (18, 103), (17, -49), (-5, 25), (-26, -9),
    (-18, -33), (-14, 26), (30, -11), (-6, 23), (-12, 69), (2, 25), (-2, 56), (7, 10),
    (20, -4), (28, 8), (9, 41), (-24, 18), (-16, 49), (3, 12), (-8, 44), (18, -22),
    (-4, 38), (17, 18), (25, -21), (-2, 57), (13, -41), (-17, -38), (21, -10), (-15, -4),
    (29, 68), (-9, -5), (13, 125), (2, 33), (29, -10), (13, 108), (23, 59), (-24, 76),
    (-25, 36), (17, 81), (-20, 41), (-20, 101), (11, 33), (-21, 86), (20, 113), (-15, -58),
    (-8, -6), (-1, 107), (9, 129), (-16, 42), (9, -47), (-25, 36), (-13, 46), (-23, 99),
    (-7, 30), (6, 44), (-4, 48), (-19, 68), (-12, 11), (18, 119), (-6, 74), (28, -43),
    (1, -42), (-10, -62), (-24, 4), (-20, 41), (-21, 80), (-1, 44), (6, 36), (28, 71),
    (7, 20), (21, -36), (22, 120), (23, 55), (-18, 122), (28, -31), (-7, 94), (22, 20),
    (-24, -23), (-6, 92), (15, 91), (-21, 76), (23, 20), (17, 31), (26, -21), (-24, 76),
    (29, 37), (-18, -59), (-25, 42), (27, 43), (25, 21), (-11, 35), (18, 11), (-18, 31),
    (-3, -21), (15, -41), (-22, 101), (0, 67), (0, 49), (22, 94), (-25, 57), (-22, 125),
    (-24, 77), (24, -31), (-18, 84), (29, 119), (-13, 49), (24, -3), (-17, -17), (-13, 29),
    (-17, 106), (-7, 20), (-22, -53), (13, 33), (16, 56), (16, 12), (14, 28), (-2, 31),
    (-4, -21), (-15, -52), (-4, 20), (-4, 34), (25, -59), (16, 47), (2, 60), (4, 108),
    (1, 104), (3, 60), (25, 55), (5, -31), (4, 59), (15, -40), (-1, 64), (-13, 15),
    (-19, 124), (-21, 125), (10, 123), (17, -63), (23, 87), (-8, 95), (-19, 43), (28, 8),
    (-6, 7), (9, -27), (-1, 15), (-19, -24), (-1, 74), (-20, 105), (5, -46), (-12, 83),
    (8, 114), (-11, 7), (0, 18), (-26, -19), (-6, 67), (24, -21), (3, -28), (11, 37),
    (4, 31), (-21, 30), (-6, -5), (-14, 48), (-9, 25), (-5, -38), (-10, 108), (19, 53),
    (22, 4), (-2, 25), (12, 0), (24, 106), (23, 41), (22, 67), (-13, -1), (19, -34),
    (27, 124), (-3, -53), (-10, -64), (-4, -56), (-8, 12), (0, -13), (6, 45), (-26, 7),
    (-2, 115), (-17, -47), (8, 1), (-23, -52), (19, 120), (21, 88), (26, 13), (6, 42),
    (-11, 26), (18, 109), (-21, 71), (-25, 126), (25, 111), (26, -32), (-6, -7), (15, 21),
    (-1, 99), (11, 87), (1, 56), (-15, 4), (26, 106), (-4, -47), (-14, 29), (-4, 70),
    (22, -55), (11, 58), (3, 82), (-21, 129), (15, 99), (26, 22), (0, -34), (-21, 65),
    (22, 14), (25, 50), (17, 85), (15, -43), (-15, 24), (12, 17), (19, 63), (5, 102),
    (30, 76), (4, 42), (5, 47), (-8, 92), (8, -37), (7, 129), (-24, -14), (4, -31),
    (27, 38), (18, -47), (-10, -63), (11, -30), (-21, -14), (-5, -18), (2, 58), (28, 27),
    (-3, -27), (26, 116), (11, -64), (-25, 106), (18, -27), (-16, 49), (-19, 129), (19, -14),
    (13, -64), (-3, 3), (-3, 83), (23, -63), (4, 21), (-21, 28), (-17, 43), (-4, 50),
    (-7, -48), (18, 73), (-23, -5), (-23, -61), (9, -11), (24, 126), (12, 109), (8, 49),
    (-23, 88), (11, 55), (16, 2), (16, 117), (-1, -62), (29, -30), (-5, 99), (30, 49),
    (-2, 52), (18, 83), (-9, 125), (-18, -16), (-5, 33), (21, 62), (-24, 15), (16, -26),
    (1, -55), (19, 42), (10, -26), (-26, -14), (3, -18), (-18, 45), (5, 84), (14, 102),
    (28, 29), (-12, 100), (11, -47), (29, 112), (-12, 113), (9, 71), (20, 2), (7, -2),
    (20, 120), (21, 118), (25, 97), (-12, 110), (19, 25), (-9, 74), (-7, 51), (-20, 95),
    (8, -2), (19, 74), (-17, 48), (-22, 41), (27, 113), (13, -41), (5, -59), (-4, 62),
    (13, -21), (-25, -25), (-11, 59), (-10, 55), (-26, -41), (-7, 92), (-24, 10), (-10, 125),
    (1, -10), (-2, -46), (23, 9), (-17, -53), (28, -52), (-21, 35), (19, 65), (-6, 11),
    (-1, 51), (19, 127), (12, -36), (-22, -2), (26, 44), (-22, 27), (-4, 77), (9, -41),
    (12, 4), (7, 97), (12, -64), (11, -1), (-12, -36), (13, -13), (-2, -21), (-1, 114),
    (14, 46), (12, -5), (10, 99), (2, -8), (27, 65), (5, 50), (-11, 47), (12, 113),
    (30, 106), (-21, -54), (24, 27), (19, 123), (4, 88), (30, 130), (10, 98), (-7, -45),
    (15, -47), (18, 86), (4, 3), (29, -3), (-9, 18), (-14, 106), (-7, 37), (1, 46),
    (-21, 12), (22, -25), (-3, 69), (-12, -50), (3, -46), (19, 109), (-26, 54), (2, -57),
    (-11, 86), (29, 56), (27, 65), (30, -31), (-7, 83), (8, 96), (9, -30), (30, 89),
    (-24, -38), (-23, 41), (27, 111), (19, 33), (-24, -58), (25, -27), (20, 65), (23, 26),
    (9, 13), (18, -57), (2, -51), (8, 96), (19, 61), (-23, 15), (26, 26), (21, 83),
    (-24, 117), (-21, -60), (3, 73), (-13, 49), (26, 99), (-8, -5), (30, 122), (-15, 31),
    (-17, 70), (-15, -56), (-8, 105), (8, 92), (19, 120), (8, 54), (8, -41), (-12, 26),
    (26, 39), (15, 38), (-13, -18), (15, 99), (-5, -58), (-7, 22), (-24, -56), (-3, 70),
    (-18, 92), (29, 15), (13, 95), (-11, 1), (-16, -20), (23, 19), (26, -10), (25, -22),
    (17, 64), (11, 85), (-6, -36), (18, 5), (2, 121), (28, 79), (-6, 5), (26, 1),
    (-17, -57), (-21, 33), (-23, -24), (21, 98), (5, 55), (-13, 10), (-10, 12), (7, 12),
    (3, -44), (-13, 104), (29, 58), (29, 125), (25, -19), (18, 101), (-26, 61), (-5, 27),
    (-18, 112), (-21, -48), (30, -36), (8, -31), (-5, 70), (20, -47), (-18, 76), (-23, 82),
    (-1, 98), (-8, 41), (14, 78), (-21, -9), (24, 62), (12, 105), (-20, 78), (-5, 34),
    (22, -54), (-12, 76), (4, 107), (14, -58), (-11, 130), (-1, 81), (15, 30), (19, 130),
    (10, -28), (-7, 8), (7, -52), (-6, 105), (-7, 126), (-10, 54), (28, -43), (21, -9),
    (8, -47), (19, -26), (-21, 54), (2, -43), (-18, 74), (10, -8), (28, 9), (3, -36),
    (-10, 123), (-10, 80), (19, 32), (-4, 31), (10, 2), (-7, 30), (15, 94), (-13, 108),
];

pub(crate) const INIT_PB_IDC0: [(i16, i16); 1024] = [
    (28, 121), (25, 66), (-8, 60), (-5, -7), (3, 109), (26, 124), (-21, -25), (-14, 17),
    (9, 98), (1, 89), (8, -41), (2, 115), (27, 12), (-26, 43), (-16, 88), (26, 17),
    (4, 9), (18, -47), (-24, 61), (23, 109), (15, 63), (-10, -34), (-10, 118), (-22, -12),
    (-4, -12), (-5, 23), (28, 5), (14, -53), (14, -34), (-25, 121), (-23, 108), (25, 120),
    (-9, 67), (-12, -13), (-26, -37), (21, 14), (-20, 0), (-18, -49), (-18, -1), (-17, 40),
    (20, -31), (20, 129), (14, 78), (-1, 107), (24, 77), (-15, 118), (-20, 106), (-4, 1),
    (23, 118), (15, 107), (-25, 68), (-6, -47), (-25, 20), (-6, 109), (0, 29), (-7, -63),
    (-17, 64), (-11, 117), (-7, 60), (-25, 43), (-3, 56), (-10, 8), (24, -39), (5, 128),
    (6, -44), (-9, 65), (0, 5), (26, 55), (-26, -7), (-17, 96), (-11, 88), (-17, 100),
    (14, 79), (-20, 52), (-23, -21), (16, -53), (28, 128), (19, 57), (2, 91), (5, -47),
    (-14, 91), (4, 15), (-16, -57), (-13, -15), (-23, 104), (-13, -16), (-8, 110), (-20, -22),
    (-6, 74), (8, 37), (2, 99), (-4, -34), (0, 130), (-13, -7), (6, 56), (4, -56),
    (1, 105), (-20, 67), (-1, 30), (-8, 28), (-8, 114), (-18, 25), (18, 17), (15, -42),
    (-5, -12), (22, -11), (0, -36), (-3, 4), (4, 24), (-4, 13), (-1, 24), (9, -4),
    (-1, 73), (11, 25), (-23, -44), (-7, 69), (-3, 10), (29, -51), (20, -52), (22, -55),
    (-12, 117), (3, 19), (16, -38), (-7, 18), (29, 13), (14, -23), (-12, 88), (6, 57),
    (23, -35), (29, 68), (23, -27), (-4, -53), (-6, 105), (-3, 87), (-3, 37), (-9, 24),
    (-11, 1), (22, 102), (9, -48), (-18, 87), (-22, 8), (0, 98), (16, 105), (-17, 0),
    (-11, -9), (-21, 53), (-24, 46), (30, 87), (-5, -33), (21, 96), (-26, 69), (-20, -41),
    (8, 92), (-22, 86), (4, -61), (-13, 0), (23, -41), (-24, -55), (23, 55), (20, 81),
    (-24, -23), (5, 43), (-6, -2), (-10, 51), (22, 71), (20, -41), (27, -52), (-23, 5),
    (-15, 68), (-25, -64), (-22, 34), (-12, 18), (21, -48), (-7, 105), (7, 2), (13, -52),
    (-22, 75), (9, -52), (12, 55), (27, 100), (28, 20), (-4, 49), (-23, -10), (0, -25),
    (26, 73), (-4, 92), (23, 70), (29, -63), (-2, 31), (-19, -33), (4, 127), (-13, 23),
    (-5, -48), (-4, -28), (1, 25), (-8, 126), (29, 5), (6, -26), (-9, -49), (-25, -60),
    (10, 17), (9, 71), (-1, 34), (-2, 61), (-21, -32), (-14, -16), (-9, -2), (-4, 88),
    (4, 75), (23, -2), (5, -20), (25, 112), (10, 21), (-21, 61), (-8, 16), (30, 26),
    (9, 49), (14, 66), (16, -13), (1, 53), (2, 128), (14, 64), (23, 78), (-13, 1),
    (0, -12), (27, 110), (-6, 2), (11, 110), (30, 90), (2, 123), (21, -14), (-20, -52),
    (26, -23), (-26, 49), (-5, 129), (8, 70), (4, 87), (-12, -6), (-24, 54), (-25, -43),
    (-22, 74), (-19, 128), (23, 81), (-21, 38), (21, 94), (2, 49), (-7, 0), (7, 72),
    (24, 94), (-8, 13), (25, -1), (-1, 129), (-11, -62), (11, 115), (-24, -32), (20, 17),
    (4, 87), (-8, 1), (-24, 48), (-11, 34), (8, 11), (30, 52), (-9, -48), (9, 10),
    (28, 88), (23, -1), (7, 97), (-2, 84), (-9, 93), (-6, 70), (7, -50), (-20, 40),
    (15, 46), (7, 119), (-24, -26), (-22, -34), (25, -13), (-26, 65), (9, 91), (6, 21),
    (20, 130), (14, 76), (13, -52), (16, 15), (-22, 61), (26, 44), (-19, 58), (-23, 68),
    (-22, -2), (3, 121), (-6, 98), (13, 125), (20, 26), (6, 45), (-4, 48), (9, -53),
    (-23, 26), (-3, 104), (-5, -13), (23, -47), (20, -49), (-25, 121), (-4, 50), (-12, 7),
    (11, 42), (-10, 65), (-10, 95), (-8, -31), (22, -54), (-24, 7), (30, 89), (-15, -56),
    (-3, 65), (7, 109), (-4, -49), (-21, 67), (-9, 76), (-7, 120), (29, 28), (11, 78),
    (9, 72), (21, -11), (7, -9), (5, -15), (14, 18), (-25, -61), (13, -10), (-3, -62),
    (-18, 58), (13, 35), (-12, -1), (-3, 126), (-5, -6), (17, -31), (27, -42), (8, -20),
    (14, -35), (-25, 81), (-14, 126), (-10, 68), (29, 12), (4, -42), (26, -50), (18, 32),
    (-25, 125), (-15, 111), (-22, 91), (21, -6), (-17, -53), (-21, 118), (11, 28), (10, 104),
    (-8, 118), (20, 98), (-4, -52), (5, 74), (-6, 5), (21, 22), (-5, 5), (28, 106),
    (-4, 89), (3, 31), (-14, -27), (-13, 126), (-10, 14), (-2, 116), (-18, 97), (-7, 90),
    (2, -12), (14, 49), (-2, -27), (-15, 3), (-25, 110), (20, 114), (16, 29), (-9, 113),
    (-11, -8), (-14, 121), (5, 104), (-24, -21), (-17, 91), (-1, 62), (26, -42), (14, -18),
    (30, 25), (-19, 54), (-6, -11), (18, 23), (-19, 94), (-17, 3), (-21, 62), (3, 120),
    (8, 40), (16, -2), (23, -52), (-18, -30), (10, 123), (-3, 18), (-13, 120), (-8, 92),
    (-1, -20), (4, -1), (26, 48), (-4, 109), (-25, -5), (-26, 76), (12, 55), (16, 105),
    (21, 3), (-10, 34), (19, 44), (-11, 60), (23, -22), (23, -43), (30, 106), (0, 51),
    (-3, 87), (-14, 5), (10, 66), (-26, 68), (9, -37), (-9, 46), (25, 75), (-13, 38),
    (-7, 115), (27, 12), (10, 107), (-17, 7), (-2, 85), (-7, -3), (21, -56), (-21, -20),
    (-3, 47), (0, 22), (-7, -12), (29, 5), (-24, 62), (26, 37), (17, 117), (-12, -55),
    (-2, 99), (24, 24), (-16, -5), (24, 128), (22, -61), (12, -49), (11, -46), (4, 31),
    (-1, 96), (18, 48), (5, 16), (6, 87), (10, 71), (-4, -28), (-19, -20), (-15, 55),
    (-24, 76), (-9, -57), (-21, 25), (-11, 85), (21, 94), (-8, -32), (-14, -63), (30, -12),
    (0, 41), (17, -34), (-15, 87), (8, 70), (19, 106), (-19, -63), (12, -19), (23, -50),
    (15, 52), (2, 15), (9, -1), (22, 96), (-25, -8), (-19, 54), (4, 20), (12, 67),
    (-11, 5), (-16, 81), (-9, 125), (-14, 105), (-13, 17), (17, -5), (-23, 83), (-16, -30),
    (16, -53), (-16, 91), (-3, 64), (8, 5), (8, 103), (5, 54), (12, 96), (1, -42),
    (26, -55), (26, 129), (-13, -62), (-8, -14), (23, 0), (-11, -26), (27, -57), (-23, 112),
    (-21, -38), (12, 60), (27, 84), (-3, 89), (22, 104), (-2, 90), (8, 17), (-21, 17),
    (-24, 100), (7, -61), (10, 94), (-11, -9), (-10, 51), (13, 58), (-18, 7), (-14, -27),
    (27, 47), (-11, -6), (-9, 115), (-23, 70), (10, -35), (9, -3), (26, -20), (2, -59),
    (-9, 36), (6, 83), (-5, 15), (0, 65), (-6, 90), (-3, 11), (15, 21), (-4, -1),
    (16, -44), (19, 21), (29, -14), (4, -47), (23, 81), (6, -56), (16, 15), (-2, 100),
    (14, 119), (-9, 50), (27, -49), (18, 129), (-7, 60), (-8, 95), (10, -48), (-14, 120),
    (-18, 89), (28, 119), (-10, 9), (-18, 24), (26, 41), (3, 8), (6, 69), (22, 35),
    (-4, -36), (14, 23), (29, 70), (-26, 75), (-8, 112), (27, 95), (26, 29), (7, 32),
    (7, -46), (0, -53), (-23, 15), (-20, -56), (18, 109), (3, -50), (-12, 121), (-22, 8),
    (2, 65), (25, -56), (-9, 15), (29, 30), (-3, -29), (7, 82), (19, -40), (-17, 82),
    (-18, -11), (25, -23), (-8, 12), (7, -42), (19, -33), (18, 118), (25, 17), (21, 39),
    (-21, 19), (-16, -24), (8, 59), (-10, -57), (-20, 98), (-7, 32), (12, -5), (-13, -27),
    (14, -45), (-1, -23), (-22, -47), (18, 123), (24, 97), (-23, 72), (1, 113), (-11, -53),
    (28, 71), (30, 49), (5, 17), (17, 119), (30, -62), (7, 1), (19, 11), (14, -29),
    (-12, 109), (-2, 130), (24, 31), (0, 31), (2, 69), (-15, 84), (28, 119), (8, -57),
    (-13, -34), (11, -37), (19, 90), (-9, 87), (15, 112), (11, -42), (17, 2), (9, 54),
    (27, -2), (-25, 9), (4, 91), (-5, -25), (-19, 104), (-18, -55), (-1, 2), (-8, -26),
    (30, -39), (12, 45), (-16, 12), (2, 91), (15, 20), (21, 17), (8, 120), (5, 104),
    (-3, 49), (28, 116), (-4, -7), (-19, -5), (-11, 110), (13, 92), (22, 55), (29, 106),
    (11, -25), (26, -6), (0, 95), (-12, -37), (5, -48), (-11, -62), (-16, -54), (1, 80),
    (27, 42), (27, 11), (-16, -14), (-25, -58), (2, -43), (-14, 91), (-1, 37), (-25, 67),
    (18, -26), (-7, 50), (16, -56), (-21, 23), (2, 92), (26, 86), (15, -4), (-23, -61),
    (-24, 10), (15, 16), (-20, 1), (3, 86), (-5, 82), (-3, 89), (-3, -5), (12, 87),
    (12, 2), (-8, 87), (6, -33), (-4, 54), (3, -1), (25, 23), (12, -53), (12, -10),
    (-25, 42), (28, 9), (0, 63), (27, 35), (-8, 60), (-25, 60), (28, 129), (11, 123),
    (11, -33), (-14, 119), (9, 88), (9, -57), (4, -23), (-2, 35), (15, 27), (0, -54),
    (7, -27), (-13, -61), (-6, -49), (26, 65), (-1, 63), (-17, 121), (28, 28), (1, 19),
    (4, 93), (-10, 60), (-19, 96), (19, -24), (4, 101), (8, 47), (-26, 67), (-2, -48),
    (17, -3), (21, -63), (-13, -64), (13, -46), (-12, -35), (16, 104), (-21, 70), (15, 109),
    (-18, 123), (11, -22), (-11, -26), (-18, -35), (12, -62), (23, -36), (10, -48), (3, -46),
    (-19, -41), (26, 33), (-19, 111), (16, -13), (26, 114), (-10, 112), (-7, 81), (28, -51),
    (-14, 117), (-18, 21), (15, -15), (4, 44), (20, -1), (-7, -59), (-22, 66), (16, 2),
    (-8, 12), (11, 107), (0, -47), (-17, 39), (10, 30), (11, -25), (-20, 59), (6, 130),
    (12, 114), (22, -7), (24, 69), (24, -61), (-14, -56), (-13, 7), (16, -29), (8, 89),
    (20, 68), (30, -37), (13, -7), (5, 46), (11, -60), (-20, 100), (23, -33), (28, -45),
    (-14, 125), (18, -45), (-17, 119), (-17, 80), (-15, 12), (3, 122), (25, 120), (22, 81),
    (-4, 21), (0, 40), (12, -3), (19, 19), (5, 38), (-2, -22), (-7, -18), (-10, 34),
    (-5, 46), (7, 112), (-3, -27), (15, 73), (-11, -14), (-4, 8), (-18, 34), (-24, 2),
    (-9, 66), (6, 100), (3, 121), (-18, 64), (21, 56), (-23, -3), (-18, 87), (-5, 128),
    (0, 122), (4, 128), (5, 128), (12, 2), (-26, 30), (23, -25), (-3, 71), (-3, 0),
    (-2, -1), (4, 99), (20, 118), (27, -27), (-15, 87), (11, 54), (24, 30), (19, -46),
    (5, 76), (21, 46), (-5, 53), (-11, 65), (-23, 75), (18, 65), (2, -6), (-8, -60),
    (21, -44), (-9, 48), (0, 90), (25, 23), (-7, -33), (13, -61), (17, -30), (-25, -36),
    (-6, 57), (3, -39), (-18, 1), (-13, 33), (-6, -4), (-10, 77), (26, 47), (9, 85),
    (8, -7), (-6, 113), (6, -23), (4, -64), (-5, 63), (-10, 20), (-10, 98), (11, 19),
    (4, 45), (10, 123), (-7, 28), (3, 1), (-10, 86), (25, 14), (-16, 118), (-20, 16),
    (-12, -42), (20, 16), (16, 78), (20, 113), (17, -51), (19, 32), (14, -11), (-13, 68),
    (-16, 59), (-23, 53), (-19, 115), (-16, 32), (30, 104), (5, 42), (0, -10), (15, 82),
    (-21, 22), (6, 87), (-22, 98), (-13, 55), (4, 63), (-17, 122), (29, 29), (-13, 120),
    (8, -6), (-20, 24), (-10, 52), (-16, 127), (23, 101), (-8, 78), (12, 100), (8, 3),
    (28, 42), (28, 50), (-15, 23), (7, 117), (15, 118), (-25, 56), (-11, -50), (-17, 46),
    (18, 129), (30, 74), (-10, 58), (-12, 44), (5, 19), (-26, 109), (29, 43), (5, 81),
    (13, 57), (2, 125), (-2, 62), (-9, -59), (7, -24), (-8, -16), (12, -34), (-10, -30),
    (-16, -11), (-7, 46), (16, -53), (-24, 49), (-2, 126), (0, 52), (21, -13), (9, -28),
    (30, 11), (3, 0), (-21, 115), (14, -27), (-8, -17), (-2, 102), (-19, -41), (6, 125),
    (-15, -26), (14, 27), (18, 99), (24, 106), (2, 88), (20, 74), (-23, 67), (-13, -29),
    (13, 105), (-4, 99), (-15, 61), (3, 54), (0, 46), (27, -27), (-23, 81), (3, 53),
    (-12, -34), (-24, 40), (29, 19), (-9, 120), (3, 67), (18, 82), (3, 20), (28, 21),
    (-15, 127), (-6, -25), (-21, 18), (21, 16), (-17, 82), (-2, -3), (-16, -8), (-5, -1),
    (-4, 23), (12, 30), (29, 55), (25, 95), (9, 81), (-20, -58), (-12, 105), (-12, 20),
    (-24, -47), (23, 2), (6, -33), (10, 54), (8, 10), (7, 74), (8, -58), (17, 56),
    (-9, 19), (-18, 126), (-9, 20), (-9, 76), (7, -38), (-21, -55), (-1, -35), (30, -61),
    (-18, 39), (22, -50), (18, 70), (-3, 33), (5, -24), (5, -6), (-2, 113), (30, 14),
    (2, 45), (9, 12), (28, 89), (6, -7), (-18, -21), (-6, 72), (11, 41), (20, -39),
    (-3, 50), (11, 32), (-18, 115), (-23, -56), (7, 126), (-21, -10), (-15, -7), (-10, 31),
];

pub(crate) const INIT_PB_IDC1: [(i16, i16); 1024] = [
    (14, 33), (-17, 63), (24, -44), (-26, 74), (17, 84), (26, 58), (4, -28), (-11, 6),
    (-11, 79), (-2, -62), (30, 95), (18, 112), (10, 98), (20, 62), (-15, 12), (28, 29),
    (-18, 22), (24, -44), (-19, -10), (11, 56), (-26, -19), (7, 90), (-12, 109), (22, 36),
    (-10, 40), (29, -6), (-2, 56), (15, -12), (-16, 65), (13, 112), (-10, 44), (9, 130),
    (25, 71), (25, 118), (-2, 62), (0, 7), (16, 16), (-14, 90), (5, -14), (-26, -40),
    (-18, 57), (21, 114), (-3, 114), (-12, 71), (27, 47), (14, -18), (12, 39), (7, 23),
    (18, -39), (25, 46), (4, 82), (-26, 84), (-15, -14), (-23, 45), (-16, -6), (-10, -47),
    (-21, -15), (-25, 124), (-16, 114), (-18, 33), (-22, 53), (-9, 72), (12, 117), (-15, 7),
    (29, 61), (-26, -39), (1, -20), (-9, -62), (-10, -39), (14, -49), (-18, 98), (19, 0),
    (-21, -53), (-17, 26), (-9, 2), (17, -53), (-7, 86), (-15, 26), (8, -15), (1, -6),
    (6, 76), (12, 91), (-8, 130), (-18, 38), (12, 9), (0, 124), (-6, 79), (17, -15),
    (21, -28), (-13, 109), (-15, 26), (-5, -27), (-10, -43), (-23, 103), (19, 34), (23, 40),
    (-22, 47), (-11, 88), (5, 41), (-14, -28), (-9, -27), (-13, 74), (-10, -43), (3, 122),
    (-23, 42), (-1, -18), (-5, -16), (14, -47), (-9, -23), (-5, 55), (-26, 28), (-18, 17),
    (6, 37), (-4, -44), (-12, 44), (-12, 117), (-9, 104), (-8, -39), (16, 59), (-22, 40),
    (-9, 71), (15, -20), (30, -38), (-11, 120), (-26, -51), (8, -40), (-21, -3), (0, 118),
    (8, 9), (18, 115), (18, -8), (-16, 84), (25, -20), (0, 23), (29, -43), (27, 119),
    (14, 79), (-7, 105), (22, 77), (-20, -43), (26, 81), (6, 71), (-16, -58), (-26, 120),
    (1, 108), (26, 20), (8, -31), (-7, 108), (-15, 53), (5, -55), (-14, -50), (9, 118),
    (20, 67), (28, 40), (11, 127), (-15, -14), (-15, -15), (25, 92), (19, 10), (-4, 49),
    (-12, 76), (24, 72), (5, 82), (5, -58), (-25, -48), (20, -18), (-16, 49), (10, 97),
    (30, -15), (-17, -19), (-1, 70), (-15, 52), (-19, 70), (15, -29), (-21, -44), (14, 96),
    (11, 125), (2, -64), (-3, 38), (-14, -10), (-6, 125), (3, 5), (27, 92), (10, -20),
    (-21, -18), (23, 98), (-17, -53), (-7, 90), (-23, 52), (-10, 105), (-26, 89), (4, -62),
    (28, 66), (14, 9), (-24, -39), (-26, -58), (-13, -33), (2, 105), (-22, 90), (14, -62),
    (-23, 127), (-15, -26), (17, -27), (-22, 52), (30, -21), (-2, -32), (8, 103), (25, 107),
    (9, 67), (4, 17), (14, 88), (-1, 91), (-17, 60), (29, 70), (1, -32), (18, -51),
    (7, -33), (28, -8), (-3, -53), (-17, 43), (23, 68), (29, 60), (17, 37), (-3, -27),
    (10, -60), (-7, -18), (1, 51), (5, 90), (-24, 98), (22, -12), (-5, 60), (19, -11),
    (8, 128), (-26, -40), (-8, 24), (0, 62), (-9, 33), (-8, 119), (26, 60), (0, -16),
    (23, 47), (18, 87), (-21, -37), (8, -16), (25, -58), (12, 69), (21, 123), (-17, -5),
    (6, 82), (19, -13), (-6, 125), (0, 46), (8, 98), (14, 88), (-10, 22), (8, -46),
    (5, 93), (-10, 2), (-3, -16), (1, -52), (-19, 57), (26, 66), (-24, -28), (30, 84),
    (-1, 97), (24, -47), (28, 119), (18, 52), (-13, 129), (-9, 85), (21, 27), (-12, -51),
    (-14, -29), (-3, 108), (-13, -32), (8, 112), (27, -55), (6, -44), (15, -28), (-14, 107),
    (30, -15), (13, 43), (28, 5), (22, 79), (25, 35), (-2, 19), (2, 18), (-12, 85),
    (7, -40), (-23, 21), (17, 100), (5, 71), (0, 0), (-18, 52), (2, -8), (13, -52),
    (24, 73), (7, -10), (-13, 14), (-17, 71), (-15, -18), (12, -61), (-14, 113), (-13, 30),
    (-8, 85), (-18, 115), (27, 81), (-18, -30), (-12, 93), (2, 53), (11, 55), (14, 57),
    (19, -30), (-19, -51), (13, -12), (-15, 101), (26, -49), (-24, 52), (-10, 76), (-22, 47),
    (17, -35), (13, -58), (15, -55), (-12, 90), (-24, 106), (19, 0), (30, -42), (4, 45),
    (5, 17), (-10, 113), (17, -1), (-3, 20), (-4, -63), (-10, 115), (8, 60), (10, 29),
    (-6, 25), (-12, -61), (3, -57), (12, 62), (-2, -32), (8, -34), (14, -59), (6, 9),
    (20, 7), (-4, 24), (4, -47), (21, 67), (20, 78), (-17, 72), (23, 84), (-19, 100),
    (-4, -36), (7, -15), (2, 38), (29, 74), (-11, 73), (-20, 111), (18, 74), (-4, -52),
    (-16, 127), (-18, 107), (-5, -36), (-6, 113), (24, -31), (10, -2), (9, -16), (-8, 121),
    (-7, 8), (-1, 89), (-15, -25), (25, 128), (12, 8), (19, -46), (2, -29), (15, 89),
    (17, -51), (5, 77), (4, 95), (7, -10), (-2, -39), (-8, -18), (9, -33), (-24, 24),
    (-12, -14), (19, 123), (-1, -21), (17, -42), (-12, 48), (-8, 50), (21, 103), (-4, 3),
    (14, -4), (-13, 128), (-13, 69), (28, -24), (-25, 17), (14, 64), (-2, 36), (-1, 28),
    (14, 116), (29, 76), (18, -17), (5, 109), (-20, 4), (10, 1), (21, 66), (-9, -17),
    (20, 15), (-16, -12), (-14, -49), (-9, -7), (20, 70), (18, -3), (-23, 45), (-20, 17),
    (14, -37), (-23, 128), (-6, 75), (-14, 19), (22, 104), (-9, 8), (-24, -24), (-18, 60),
    (6, -7), (12, 19), (28, -31), (-5, -37), (29, 95), (-23, 23), (-21, -8), (-13, 77),
    (-3, -22), (-3, 46), (29, -9), (9, 16), (18, 36), (-8, -32), (-19, -54), (2, 119),
    (19, 37), (10, -62), (-5, 31), (4, 18), (12, 116), (27, 116), (3, -23), (-25, -56),
    (-10, -54), (-19, -6), (10, 23), (-4, -6), (-3, -21), (10, 129), (5, 42), (-11, 82),
    (13, -55), (-20, 130), (-19, 56), (30, 0), (-15, -21), (-18, 11), (8, 5), (17, -21),
    (-23, 71), (-12, 107), (28, 126), (19, -31), (2, 4), (21, 125), (-11, 20), (-5, 3),
    (-21, -30), (-12, 7), (-3, -41), (15, -18), (29, -9), (-2, -45), (-18, 125), (-16, 39),
    (18, 121), (-23, 46), (8, 58), (-25, 80), (11, 16), (2, 59), (-11, 113), (21, 93),
    (2, 20), (29, -26), (-11, 73), (29, 128), (9, 3), (6, 60), (19, 30), (19, -63),
    (-4, 5), (14, 68), (24, 110), (-16, -18), (13, 120), (0, -35), (-3, 106), (-21, 4),
    (15, 64), (19, 17), (-3, -26), (-12, 79), (-3, 18), (30, -2), (0, -50), (30, 113),
    (-20, 40), (-14, -18), (28, 16), (-24, 99), (0, 37), (-1, 43), (12, 6), (-16, 37),
    (27, -28), (-4, -38), (-23, 113), (19, 51), (-5, 74), (-12, -8), (13, 107), (-8, 68),
    (-16, 24), (8, 8), (-22, -20), (-20, 98), (12, 39), (30, 129), (24, 64), (28, -39),
    (25, -63), (-21, 45), (-20, 120), (4, 51), (-1, 127), (-9, 104), (17, -41), (15, 112),
    (-11, 11), (-26, 78), (19, 25), (29, -10), (-25, 31), (6, 122), (18, 76), (10, 46),
    (22, 73), (-20, 88), (28, 67), (25, 107), (-26, -12), (-24, 86), (-21, 50), (22, -63),
    (5, 105), (-13, 76), (-4, 97), (-22, -40), (-12, -48), (4, 107), (5, 12), (15, 121),
    (3, 32), (-21, -61), (1, 29), (5, -58), (-7, -37), (11, 23), (-26, -40), (-21, -22),
    (14, 47), (-9, -9), (0, -47), (-2, -43), (-20, 9), (-22, 49), (18, 24), (-18, 5),
    (9, 9), (7, 129), (7, -57), (-19, 69), (21, -57), (-16, -46), (21, 122), (-1, -16),
    (-1, 109), (-6, 43), (-11, -18), (22, 8), (-10, -31), (5, 70), (-26, 98), (7, -53),
    (-20, 67), (14, 11), (21, 12), (28, 27), (-6, 74), (-14, -56), (-24, -56), (-17, 24),
    (13, -59), (12, -52), (-3, 126), (15, 45), (13, 19), (-19, -3), (-13, 92), (-19, 30),
    (21, 42), (11, 114), (-20, -42), (-24, -24), (0, 37), (10, 112), (13, 9), (-16, 6),
    (30, 12), (27, 124), (5, 54), (-23, 1), (17, -22), (-15, -55), (24, 10), (-25, 47),
    (17, 101), (-17, 115), (-11, -23), (-13, -44), (-26, 39), (28, 57), (-21, 61), (-8, -33),
    (15, 27), (8, 38), (-8, 95), (-24, 19), (-6, 37), (-20, 37), (-14, 17), (1, -21),
    (-21, 76), (-4, 38), (-15, -40), (6, 23), (-10, -38), (-20, 122), (-13, 36), (-10, -29),
    (3, 48), (29, 99), (-3, 89), (7, 130), (-10, -53), (5, 68), (-26, 102), (-9, 75),
    (9, -36), (5, 89), (10, 3), (-3, 6), (-24, -3), (19, 98), (-4, 115), (-11, 126),
    (-12, 118), (-9, 12), (-4, 110), (2, 1), (23, 54), (28, -40), (25, -62), (10, 75),
    (-21, 123), (-26, -63), (3, -52), (-23, -52), (-25, -19), (21, 80), (17, 12), (29, -7),
    (-3, -16), (-11, 55), (-26, -43), (-21, -45), (30, 56), (1, 3), (6, 51), (-21, 72),
    (-17, -59), (-13, -48), (18, 119), (-22, -39), (17, 117), (-21, 105), (-17, 9), (0, 103),
    (6, 87), (0, -17), (15, 49), (-11, 32), (22, 22), (19, 100), (-25, 8), (-6, -26),
    (9, -19), (9, 125), (-14, 62), (24, 31), (7, -41), (13, 42), (17, 38), (6, 92),
    (22, 65), (20, 85), (27, 75), (3, 120), (23, -27), (16, -19), (18, -23), (-20, -37),
    (23, 107), (-19, -43), (0, 92), (-21, 42), (27, -9), (14, 27), (-26, 47), (16, -4),
    (22, -59), (25, 112), (12, 109), (-26, 55), (-22, 75), (-21, 70), (28, 66), (-3, 117),
    (-23, 64), (24, 127), (9, 6), (24, -19), (6, 12), (14, 121), (4, 109), (-20, 34),
    (5, -29), (10, -61), (8, -29), (11, 17), (-6, 52), (14, 20), (-1, -19), (29, -46),
    (24, -9), (-21, 25), (-23, -32), (-26, 54), (6, -52), (-24, 94), (28, -3), (-6, 122),
    (12, 77), (14, -53), (-24, 63), (13, 125), (20, 72), (-17, 24), (11, -23), (20, 98),
    (-15, 33), (-16, -46), (26, 31), (-10, -28), (-9, 115), (10, 53), (-16, -28), (-24, 120),
    (-23, 77), (24, -40), (-23, -44), (-3, -27), (-6, 86), (28, 37), (4, 77), (30, 41),
    (16, 80), (10, 27), (-6, -47), (-2, -29), (-13, 87), (10, 109), (30, 25), (-8, -45),
    (-26, 125), (3, 63), (5, 1), (8, 80), (19, 16), (4, 59), (-22, 14), (-11, 37),
    (-20, -33), (-12, -42), (-13, -52), (-23, 64), (5, -47), (-6, -46), (4, -53), (-24, -14),
    (-26, 68), (20, 52), (4, -1), (12, 55), (18, 82), (23, -11), (0, -26), (29, 110),
    (-11, 41), (27, 106), (23, 8), (-2, -56), (-4, 19), (19, -62), (-23, -24), (18, -52),
    (-9, -11), (-3, 124), (-26, 112), (9, 38), (-15, -36), (10, 14), (17, 33), (17, 21),
    (-11, 57), (5, 111), (28, 121), (6, -27), (24, -43), (8, -28), (7, -32), (28, -4),
    (18, -50), (-4, 95), (-5, 3), (-2, 65), (29, 107), (-24, 36), (-7, 121), (1, 39),
    (10, 3), (-22, -28), (3, 18), (-2, 114), (23, -15), (6, 106), (26, 21), (-13, -59),
    (-6, 59), (5, 62), (-9, 120), (18, -63), (19, 69), (0, 41), (-14, 17), (-20, 48),
    (14, -12), (-4, -35), (0, -17), (19, 104), (-19, -48), (22, -59), (-23, -22), (6, 40),
    (0, 24), (17, 8), (7, -60), (16, 108), (-2, 21), (-10, -17), (-26, 13), (1, 73),
    (21, 35), (-3, 25), (-19, 7), (-13, -52), (18, -37), (19, -10), (9, 5), (-21, -40),
    (25, 96), (21, 71), (-12, 11), (4, 93), (0, -60), (-8, 48), (5, -28), (24, -13),
    (-8, 12), (-17, 91), (29, 15), (26, 51), (7, -19), (5, 120), (-11, -19), (20, 106),
    (25, -2), (-11, 3), (12, -46), (11, 88), (18, -31), (17, 57), (16, 10), (0, 11),
    (5, 33), (-1, 51), (-6, 112), (20, -61), (5, -4), (21, -40), (-1, -63), (29, 130),
    (-14, -60), (1, -22), (26, 126), (-1, 94), (19, 74), (11, 123), (-18, 18), (11, 61),
    (-9, -19), (-19, 59), (5, -23), (-13, -49), (-18, 14), (29, -14), (-10, 95), (-4, 54),
    (-9, 27), (15, 112), (12, 37), (12, -1), (-14, 108), (1, -59), (12, 94), (17, 129),
    (-1, 84), (25, 44), (14, 43), (9, 120), (-5, 31), (-21, 13), (13, -7), (13, 51),
    (25, 126), (-3, 13), (19, 120), (25, -58), (-14, -48), (-26, 24), (14, -58), (-1, 24),
    (0, -64), (-17, -10), (-14, -15), (4, -60), (-14, -46), (-11, 77), (-17, 58), (26, 105),
    (-2, -41), (-10, 65), (-8, -63), (7, 3), (21, 93), (6, 128), (-16, 79), (-20, -47),
    (15, -16), (24, -42), (12, -3), (0, 23), (23, 117), (5, 115), (-25, -23), (9, 29),
    (-24, -17), (7, 29), (-1, -33), (-1, -51), (-19, 4), (-5, -34), (-8, 96), (-11, -14),
    (-25, -5), (27, 48), (-6, 91), (18, 15), (-16, 20), (-17, -12), (-9, -43), (-23, -26),
    (-14, -8), (-1, 111), (26, 122), (10, 4), (28, -28), (30, -54), (-10, -47), (-8, 85),
    (30, -38), (2, 85), (-4, 46), (4, -8), (-10, 75), (16, -39), (20, 125), (-26, 99),
];

pub(crate) const INIT_PB_IDC2: [(i16, i16); 1024] = [
    (-14, 109), (-17, 80), (-10, 17), (8, 78), (-9, 65), (-10, -57), (-17, -12), (-4, 39),
    (-21, 4), (0, -60), (-10, 74), (-18, -10), (17, 35), (8, 10), (23, 3), (-15, 57),
    (-19, 78), (-11, -34), (9, 97), (-26, -45), (-12, -3), (22, -33), (30, -62), (-22, -25),
    (-26, 104), (-26, -60), (4, -37), (13, -5), (27, -48), (-16, 95), (29, 94), (-17, 5),
    (20, 76), (-22, 95), (-11, -4), (-12, -33), (30, 105), (12, 63), (-9, 53), (2, 73),
    (-8, 20), (-24, 114), (25, -30), (-21, 11), (6, -21), (14, -49), (-26, 102), (12, -18),
    (9, -24), (-5, -46), (-4, 40), (9, -59), (-11, -34), (17, 108), (4, 48), (10, 57),
    (16, 61), (19, 120), (2, 93), (5, 86), (14, -27), (-14, 99), (-23, 125), (28, 75),
    (-20, 25), (30, 105), (0, -31), (-20, 128), (21, 15), (15, 108), (17, -30), (17, -26),
    (14, 108), (-23, 13), (-18, 27), (-14, 80), (-9, 123), (0, 54), (7, 115), (16, -49),
    (0, 57), (-13, 74), (26, 74), (14, -60), (6, -36), (17, -52), (-21, 129), (-12, 9),
    (24, 55), (-1, 11), (15, 97), (-14, -50), (-15, 64), (-1, 24), (15, 100), (6, 5),
    (-5, -10), (1, 51), (-3, -23), (-12, 118), (0, -26), (4, 79), (26, 26), (-5, -15),
    (23, 50), (-1, 19), (5, 118), (-22, -41), (23, 48), (-18, 99), (-19, -64), (-23, 69),
    (23, -18), (-19, -49), (-15, 120), (-20, 28), (26, 92), (-21, 127), (-18, -18), (-20, 88),
    (10, 129), (7, 26), (13, 107), (-20, -50), (-26, 97), (5, 94), (26, 77), (-4, 20),
    (16, 33), (-9, -12), (10, 77), (-3, -49), (-24, -59), (4, 86), (20, 58), (30, 75),
    (-15, 98), (-15, 67), (25, -53), (24, 88), (13, 61), (-24, 41), (7, 62), (30, 79),
    (-19, 82), (18, 34), (5, 36), (-16, 48), (-20, 11), (5, -55), (14, 85), (-1, -38),
    (20, -59), (24, 9), (9, -37), (-9, -2), (12, 95), (29, -42), (-21, 14), (-1, 123),
    (-24, -62), (-24, -39), (-4, 66), (9, 66), (25, 80), (-11, -31), (-14, 126), (7, 72),
    (30, 68), (-5, 26), (3, 90), (30, 11), (-8, -18), (-26, -27), (-13, 48), (-16, -48),
    (20, 68), (-26, 123), (-11, 82), (6, 56), (16, 84), (-26, -62), (27, 28), (-10, 19),
    (-6, 65), (-1, -35), (-25, 18), (-10, 95), (-19, -3), (26, -39), (-6, 125), (20, 62),
    (-14, 9), (-8, 120), (8, -24), (-19, -64), (-14, -31), (25, -53), (0, 41), (-16, 114),
    (3, -32), (-9, -6), (23, 12), (-26, -33), (-21, 102), (11, 101), (20, -55), (1, 27),
    (14, -15), (17, -1), (-9, 92), (15, 55), (25, 91), (7, -19), (-17, 108), (6, 101),
    (12, -46), (16, 108), (-19, 120), (24, 54), (-16, 41), (1, -34), (9, 59), (-10, -55),
    (-5, 24), (-19, 51), (-17, -23), (23, -53), (-1, 65), (10, -3), (-5, 93), (-13, 70),
    (-4, 51), (10, 94), (24, -26), (16, -20), (0, 119), (10, 47), (-1, 26), (20, 95),
    (-17, 81), (-6, 43), (21, -64), (22, 20), (27, 32), (-5, 23), (-12, 1), (-19, 4),
    (12, -53), (-21, -4), (-24, 62), (1, 102), (18, 128), (4, -41), (-9, -35), (-15, 126),
    (16, 100), (-1, 101), (7, 99), (-16, 13), (-19, -35), (6, 40), (0, -1), (-23, -28),
    (15, -62), (11, 127), (4, -12), (-20, 42), (11, -53), (6, 121), (-15, 86), (28, 72),
    (-10, 101), (-26, -30), (-1, -21), (-14, -50), (7, 31), (-26, -24), (28, 98), (1, -24),
    (4, 102), (-5, -27), (16, 128), (20, -58), (-12, 58), (24, -37), (-2, -62), (-10, -13),
    (-3, 31), (9, 127), (11, 2), (21, 65), (6, 3), (-21, 68), (23, 18), (-10, 130),
    (11, 24), (16, -34), (28, 21), (9, -15), (12, 82), (17, -15), (-4, 53), (11, 27),
    (-15, 50), (4, 112), (-2, 81), (-18, 1), (-26, -4), (25, 12), (-4, 105), (-23, -4),
    (-22, 110), (25, -56), (29, -50), (27, -11), (6, 18), (14, 103), (16, -53), (17, -23),
    (28, 116), (-16, 14), (-20, 114), (-21, -56), (21, -13), (-19, -39), (29, 8), (16, 89),
    (30, -56), (-26, 65), (3, -32), (11, 36), (-1, 90), (-26, 33), (27, 87), (-26, 29),
    (-13, 123), (6, -55), (30, 126), (24, 122), (-26, 36), (20, 10), (5, 64), (-24, -20),
    (-6, 11), (18, 62), (-2, -52), (-6, 89), (9, 50), (29, -53), (-22, 109), (19, -54),
    (16, -31), (-5, 105), (6, -25), (-5, 103), (5, -33), (-20, 0), (-3, 100), (11, 111),
    (28, 66), (26, 98), (-25, 115), (25, 121), (15, 38), (4, 97), (-2, 31), (13, -5),
    (-5, -8), (29, -43), (-21, 129), (-19, 32), (-9, 119), (-6, 63), (-15, -4), (-17, -62),
    (-5, 109), (20, 6), (10, 102), (1, 105), (0, -32), (-14, -56), (-14, 83), (8, 0),
    (-11, -41), (-1, 81), (27, -4), (-24, 95), (29, -33), (29, -1), (-21, 51), (2, -42),
    (-20, 21), (-23, 17), (5, 61), (28, 12), (-1, 5), (-12, -3), (-6, 83), (16, -17),
    (-24, 51), (26, -64), (5, 0), (28, -18), (5, -49), (15, -23), (-24, 56), (20, 69),
    (-6, -15), (12, 70), (16, 32), (22, 94), (29, 37), (-19, -23), (-18, 120), (5, -54),
    (-18, 22), (-3, -28), (16, 84), (-24, 71), (-19, 79), (24, 37), (-3, 125), (29, -10),
    (15, 6), (7, -33), (11, -14), (-17, -31), (-25, -30), (-26, 48), (-22, 35), (6, 106),
    (-15, 31), (5, 44), (16, 3), (7, 106), (29, -32), (18, 24), (24, -22), (3, 122),
    (-5, 53), (2, -57), (-24, 11), (26, 62), (18, 79), (14, -5), (14, -13), (-12, 86),
    (-16, 65), (1, 105), (0, 47), (27, -19), (-3, 52), (30, -9), (13, 119), (-24, 39),
    (26, -16), (30, 62), (-22, -22), (27, 63), (9, 65), (-22, 51), (18, 7), (-11, -19),
    (21, -46), (12, -27), (18, 2), (-19, 130), (13, 72), (10, 65), (21, 120), (4, 127),
    (-14, 51), (22, -46), (4, 51), (-14, 6), (-10, 127), (5, -11), (22, 95), (16, -29),
    (-26, 34), (-24, -27), (-17, 33), (2, 20), (16, 38), (-9, 109), (22, -51), (24, -45),
    (10, 89), (-23, 113), (21, 29), (27, 91), (3, 27), (-14, -27), (24, 64), (-6, -5),
    (-25, -47), (-12, 3), (-18, 40), (-1, 80), (9, -61), (-7, 57), (12, 4), (19, -18),
    (-8, 78), (21, 35), (19, 120), (-25, 32), (7, -7), (-21, 89), (9, -23), (22, 34),
    (30, 52), (-20, -22), (-5, -28), (26, 123), (10, 7), (-26, 51), (-3, 18), (-25, 88),
    (5, 99), (-21, 23), (6, 11), (-26, 68), (9, 33), (16, 64), (7, 9), (20, 88),
    (-26, -1), (-18, 31), (29, -13), (28, 82), (-18, 79), (-19, 111), (8, 72), (-6, -15),
    (28, 72), (-5, 42), (16, 49), (2, 72), (29, -20), (-1, 5), (-21, -33), (-20, 85),
    (3, 9), (12, 84), (1, 78), (-2, -33), (0, -34), (-12, 116), (2, -10), (30, 6),
    (3, -61), (-3, 4), (-24, 46), (-25, 129), (27, 9), (-1, 42), (17, 73), (-8, 104),
    (6, 100), (-11, -54), (18, 21), (-12, -28), (-6, -11), (-11, -15), (-18, 90), (-11, -52),
    (30, 130), (5, -53), (-18, 12), (-23, 18), (-24, 49), (4, -38), (5, 122), (-14, 46),
    (-6, -61), (30, 20), (13, -36), (30, 7), (-10, 53), (14, 103), (-2, -39), (24, -10),
    (-9, -31), (14, 100), (-11, -53), (12, 9), (-13, 45), (22, 13), (-19, 103), (16, 36),
    (-21, -16), (2, 124), (-1, 24), (-22, 97), (6, 123), (3, 114), (29, 22), (8, 78),
    (9, 54), (-19, -34), (-19, 73), (18, -48), (25, -33), (29, 2), (21, 19), (25, 70),
    (-6, -39), (26, 1), (-22, -53), (-14, 90), (21, 107), (-17, 89), (4, -54), (21, 31),
    (-5, 28), (3, 62), (0, 104), (23, -2), (24, 90), (15, 123), (-14, 61), (-12, -52),
    (0, -14), (-19, 82), (22, 29), (23, -23), (-8, 11), (21, 18), (-8, -39), (-24, 8),
    (-9, 122), (-15, 40), (-3, 119), (-8, 40), (12, 62), (16, -18), (2, 86), (21, 21),
    (-20, 2), (17, -14), (27, -26), (21, -19), (-13, -51), (4, -44), (20, -25), (7, -64),
    (16, -52), (26, -60), (14, 64), (22, 81), (22, -54), (-9, 38), (28, -63), (1, 74),
    (18, 9), (-1, -17), (25, 123), (24, 113), (4, 9), (25, 113), (25, -50), (-19, 91),
    (-1, 3), (1, 65), (-11, -6), (15, -64), (27, -40), (-14, -55), (17, 15), (-12, 92),
    (25, 81), (6, -3), (15, -19), (-20, 70), (-3, 109), (22, 80), (-7, 114), (-1, 23),
    (-22, 49), (-20, 65), (1, -60), (24, -44), (27, 26), (-17, -20), (-20, 58), (27, 75),
    (8, -22), (-26, 7), (-11, 11), (-3, 90), (4, 5), (-23, 63), (-12, -52), (-8, -38),
    (-26, 1), (8, 96), (-18, 121), (-21, 85), (-14, 51), (2, 69), (8, 127), (27, 107),
    (6, 36), (-1, 21), (-7, 36), (4, 125), (22, -37), (-8, 0), (9, -33), (8, -38),
    (15, -31), (26, -28), (-11, -2), (-21, -16), (-2, 59), (-9, -5), (19, 47), (-2, 19),
    (-7, 21), (-9, -26), (-16, 29), (13, -36), (9, -34), (0, 62), (16, 130), (-5, -36),
    (-6, 22), (-4, -3), (-15, 78), (24, 19), (-10, 69), (-24, -48), (24, -48), (8, -8),
    (-2, -27), (6, 28), (-5, 31), (10, 110), (-3, -37), (-16, 60), (-19, -40), (-10, -1),
    (29, -46), (8, 105), (-14, -19), (28, -1), (0, 26), (-1, 18), (11, 95), (-19, -1),
    (-19, -42), (19, -48), (-6, 115), (-2, 117), (-15, 121), (-7, 1), (-13, 62), (26, 80),
    (-9, 82), (12, 48), (-23, -37), (-8, 40), (-6, -9), (-16, 110), (5, 110), (-1, 111),
    (-23, 49), (-1, 30), (-20, -54), (9, 42), (-11, -18), (24, -32), (7, -40), (-22, -9),
    (-7, 49), (17, 66), (-24, 42), (14, 20), (-11, 57), (-7, 35), (-8, 68), (-16, 127),
    (26, 103), (-22, -11), (-24, -31), (-21, 36), (-1, 122), (-9, 38), (21, 67), (9, -27),
    (-6, -21), (-8, 118), (-11, -59), (-16, -36), (-7, 125), (-9, 17), (17, 48), (-5, 130),
    (-3, 26), (24, -30), (-1, -4), (4, 15), (16, 7), (-22, 126), (-1, 54), (-11, 72),
    (19, 7), (-8, 74), (20, 25), (-21, 84), (18, 5), (22, 100), (-11, 65), (-7, 125),
    (-5, 2), (-25, 117), (11, 67), (-3, 7), (21, 96), (-1, 7), (0, -48), (-8, 16),
    (20, 27), (-18, 29), (10, 100), (-16, 87), (-2, -31), (16, -32), (-12, -36), (7, 113),
    (22, 1), (-8, 15), (16, -57), (-14, -31), (-13, 75), (-12, -4), (-13, 32), (-10, 94),
    (12, -38), (-20, 125), (-7, -47), (19, 11), (23, 129), (-1, 104), (-22, -41), (2, -6),
    (-4, 70), (20, 52), (-20, -21), (-10, 86), (25, -3), (-3, 25), (-23, 70), (-25, -14),
    (26, -32), (-3, 84), (-25, 69), (-12, 65), (26, 5), (27, 89), (1, -12), (-17, 9),
    (10, -54), (-8, 14), (-2, -42), (-7, -1), (-4, 63), (7, 0), (-23, 128), (-6, 76),
    (11, 93), (20, -40), (-16, 73), (6, -17), (-13, 79), (15, -2), (-12, 55), (7, -2),
    (-1, 50), (-24, -5), (2, 103), (-14, -30), (-20, 37), (1, -28), (2, -57), (-26, 46),
    (-2, -63), (24, 74), (30, -29), (-16, 91), (-21, -25), (9, 14), (1, 45), (-5, 29),
    (-6, 13), (-10, 18), (28, -33), (23, -47), (13, 94), (25, 60), (14, 14), (-24, 28),
    (-15, 33), (28, 60), (-26, 124), (-23, 123), (20, 106), (-19, 129), (23, 9), (-19, -9),
    (-4, 65), (-22, 19), (-23, 27), (-16, 5), (28, -33), (7, 65), (-5, 108), (-7, 58),
    (14, 10), (26, 31), (29, -22), (11, -18), (11, 35), (21, 96), (28, -45), (4, 112),
    (16, -30), (-1, 98), (-1, 61), (23, 58), (-7, 49), (-5, 47), (-24, -8), (-2, 121),
    (1, 61), (2, 4), (-5, 75), (2, 21), (-11, 63), (-13, -10), (27, -16), (-9, 51),
    (17, 64), (29, -31), (17, -47), (-20, -36), (6, -17), (-13, 83), (11, 108), (9, 121),
    (0, -18), (1, -55), (-21, 33), (13, 18), (12, 28), (23, -23), (-13, -36), (10, 86),
    (15, 13), (24, -48), (-10, 117), (11, 37), (-22, -42), (26, 127), (-17, -60), (-19, -62),
    (18, 78), (-1, 25), (15, -16), (20, 125), (-2, -64), (24, -52), (13, -9), (-16, -36),
    (-13, -13), (-7, 96), (-4, -8), (-4, 98), (-9, 15), (-3, 77), (11, 117), (9, -29),
    (21, -17), (4, 30), (3, -45), (19, -54), (-25, 34), (-7, 36), (25, 113), (-4, 52),
    (3, -46), (-22, -36), (25, 115), (11, -49), (13, 119), (16, 66), (18, -60), (4, 41),
    (-6, 93), (-19, -4), (-18, 112), (-6, -49), (-15, -58), (-6, -23), (-20, -5), (-13, 25),
    (-13, 3), (11, 2), (20, -52), (-2, 15), (9, 102), (12, 107), (22, 74), (-21, 24),
    (9, 22), (10, 33), (14, 29), (-4, -3), (22, 82), (10, 31), (1, 20), (5, -63),
];

