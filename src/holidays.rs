//! generated table of brazilian national holidays, 2025 through 2094
//!
//! fixed dates (jan 1, apr 21, may 1, sep 7, oct 12, nov 2, nov 15, nov 20,
//! dec 25) plus movable feasts derived from the meeus easter computus
//! (carnival monday and tuesday, good friday, corpus christi). 2025-01-01 is
//! intentionally absent: the table went live after that date. dates before
//! the window treat only weekends as non-business days.

/// (year, month, day) triples, sorted ascending
pub const NATIONAL_HOLIDAYS: &[(i32, u32, u32)] = &[
    (2025, 3, 3), (2025, 3, 4), (2025, 4, 18), (2025, 4, 21),
    (2025, 5, 1), (2025, 6, 19), (2025, 9, 7), (2025, 10, 12),
    (2025, 11, 2), (2025, 11, 15), (2025, 11, 20), (2025, 12, 25),
    (2026, 1, 1), (2026, 2, 16), (2026, 2, 17), (2026, 4, 3),
    (2026, 4, 21), (2026, 5, 1), (2026, 6, 4), (2026, 9, 7),
    (2026, 10, 12), (2026, 11, 2), (2026, 11, 15), (2026, 11, 20),
    (2026, 12, 25), (2027, 1, 1), (2027, 2, 8), (2027, 2, 9),
    (2027, 3, 26), (2027, 4, 21), (2027, 5, 1), (2027, 5, 27),
    (2027, 9, 7), (2027, 10, 12), (2027, 11, 2), (2027, 11, 15),
    (2027, 11, 20), (2027, 12, 25), (2028, 1, 1), (2028, 2, 28),
    (2028, 2, 29), (2028, 4, 14), (2028, 4, 21), (2028, 5, 1),
    (2028, 6, 15), (2028, 9, 7), (2028, 10, 12), (2028, 11, 2),
    (2028, 11, 15), (2028, 11, 20), (2028, 12, 25), (2029, 1, 1),
    (2029, 2, 12), (2029, 2, 13), (2029, 3, 30), (2029, 4, 21),
    (2029, 5, 1), (2029, 5, 31), (2029, 9, 7), (2029, 10, 12),
    (2029, 11, 2), (2029, 11, 15), (2029, 11, 20), (2029, 12, 25),
    (2030, 1, 1), (2030, 3, 4), (2030, 3, 5), (2030, 4, 19),
    (2030, 4, 21), (2030, 5, 1), (2030, 6, 20), (2030, 9, 7),
    (2030, 10, 12), (2030, 11, 2), (2030, 11, 15), (2030, 11, 20),
    (2030, 12, 25), (2031, 1, 1), (2031, 2, 24), (2031, 2, 25),
    (2031, 4, 11), (2031, 4, 21), (2031, 5, 1), (2031, 6, 12),
    (2031, 9, 7), (2031, 10, 12), (2031, 11, 2), (2031, 11, 15),
    (2031, 11, 20), (2031, 12, 25), (2032, 1, 1), (2032, 2, 9),
    (2032, 2, 10), (2032, 3, 26), (2032, 4, 21), (2032, 5, 1),
    (2032, 5, 27), (2032, 9, 7), (2032, 10, 12), (2032, 11, 2),
    (2032, 11, 15), (2032, 11, 20), (2032, 12, 25), (2033, 1, 1),
    (2033, 2, 28), (2033, 3, 1), (2033, 4, 15), (2033, 4, 21),
    (2033, 5, 1), (2033, 6, 16), (2033, 9, 7), (2033, 10, 12),
    (2033, 11, 2), (2033, 11, 15), (2033, 11, 20), (2033, 12, 25),
    (2034, 1, 1), (2034, 2, 20), (2034, 2, 21), (2034, 4, 7),
    (2034, 4, 21), (2034, 5, 1), (2034, 6, 8), (2034, 9, 7),
    (2034, 10, 12), (2034, 11, 2), (2034, 11, 15), (2034, 11, 20),
    (2034, 12, 25), (2035, 1, 1), (2035, 2, 5), (2035, 2, 6),
    (2035, 3, 23), (2035, 4, 21), (2035, 5, 1), (2035, 5, 24),
    (2035, 9, 7), (2035, 10, 12), (2035, 11, 2), (2035, 11, 15),
    (2035, 11, 20), (2035, 12, 25), (2036, 1, 1), (2036, 2, 25),
    (2036, 2, 26), (2036, 4, 11), (2036, 4, 21), (2036, 5, 1),
    (2036, 6, 12), (2036, 9, 7), (2036, 10, 12), (2036, 11, 2),
    (2036, 11, 15), (2036, 11, 20), (2036, 12, 25), (2037, 1, 1),
    (2037, 2, 16), (2037, 2, 17), (2037, 4, 3), (2037, 4, 21),
    (2037, 5, 1), (2037, 6, 4), (2037, 9, 7), (2037, 10, 12),
    (2037, 11, 2), (2037, 11, 15), (2037, 11, 20), (2037, 12, 25),
    (2038, 1, 1), (2038, 3, 8), (2038, 3, 9), (2038, 4, 21),
    (2038, 4, 23), (2038, 5, 1), (2038, 6, 24), (2038, 9, 7),
    (2038, 10, 12), (2038, 11, 2), (2038, 11, 15), (2038, 11, 20),
    (2038, 12, 25), (2039, 1, 1), (2039, 2, 21), (2039, 2, 22),
    (2039, 4, 8), (2039, 4, 21), (2039, 5, 1), (2039, 6, 9),
    (2039, 9, 7), (2039, 10, 12), (2039, 11, 2), (2039, 11, 15),
    (2039, 11, 20), (2039, 12, 25), (2040, 1, 1), (2040, 2, 13),
    (2040, 2, 14), (2040, 3, 30), (2040, 4, 21), (2040, 5, 1),
    (2040, 5, 31), (2040, 9, 7), (2040, 10, 12), (2040, 11, 2),
    (2040, 11, 15), (2040, 11, 20), (2040, 12, 25), (2041, 1, 1),
    (2041, 3, 4), (2041, 3, 5), (2041, 4, 19), (2041, 4, 21),
    (2041, 5, 1), (2041, 6, 20), (2041, 9, 7), (2041, 10, 12),
    (2041, 11, 2), (2041, 11, 15), (2041, 11, 20), (2041, 12, 25),
    (2042, 1, 1), (2042, 2, 17), (2042, 2, 18), (2042, 4, 4),
    (2042, 4, 21), (2042, 5, 1), (2042, 6, 5), (2042, 9, 7),
    (2042, 10, 12), (2042, 11, 2), (2042, 11, 15), (2042, 11, 20),
    (2042, 12, 25), (2043, 1, 1), (2043, 2, 9), (2043, 2, 10),
    (2043, 3, 27), (2043, 4, 21), (2043, 5, 1), (2043, 5, 28),
    (2043, 9, 7), (2043, 10, 12), (2043, 11, 2), (2043, 11, 15),
    (2043, 11, 20), (2043, 12, 25), (2044, 1, 1), (2044, 2, 29),
    (2044, 3, 1), (2044, 4, 15), (2044, 4, 21), (2044, 5, 1),
    (2044, 6, 16), (2044, 9, 7), (2044, 10, 12), (2044, 11, 2),
    (2044, 11, 15), (2044, 11, 20), (2044, 12, 25), (2045, 1, 1),
    (2045, 2, 20), (2045, 2, 21), (2045, 4, 7), (2045, 4, 21),
    (2045, 5, 1), (2045, 6, 8), (2045, 9, 7), (2045, 10, 12),
    (2045, 11, 2), (2045, 11, 15), (2045, 11, 20), (2045, 12, 25),
    (2046, 1, 1), (2046, 2, 5), (2046, 2, 6), (2046, 3, 23),
    (2046, 4, 21), (2046, 5, 1), (2046, 5, 24), (2046, 9, 7),
    (2046, 10, 12), (2046, 11, 2), (2046, 11, 15), (2046, 11, 20),
    (2046, 12, 25), (2047, 1, 1), (2047, 2, 25), (2047, 2, 26),
    (2047, 4, 12), (2047, 4, 21), (2047, 5, 1), (2047, 6, 13),
    (2047, 9, 7), (2047, 10, 12), (2047, 11, 2), (2047, 11, 15),
    (2047, 11, 20), (2047, 12, 25), (2048, 1, 1), (2048, 2, 17),
    (2048, 2, 18), (2048, 4, 3), (2048, 4, 21), (2048, 5, 1),
    (2048, 6, 4), (2048, 9, 7), (2048, 10, 12), (2048, 11, 2),
    (2048, 11, 15), (2048, 11, 20), (2048, 12, 25), (2049, 1, 1),
    (2049, 3, 1), (2049, 3, 2), (2049, 4, 16), (2049, 4, 21),
    (2049, 5, 1), (2049, 6, 17), (2049, 9, 7), (2049, 10, 12),
    (2049, 11, 2), (2049, 11, 15), (2049, 11, 20), (2049, 12, 25),
    (2050, 1, 1), (2050, 2, 21), (2050, 2, 22), (2050, 4, 8),
    (2050, 4, 21), (2050, 5, 1), (2050, 6, 9), (2050, 9, 7),
    (2050, 10, 12), (2050, 11, 2), (2050, 11, 15), (2050, 11, 20),
    (2050, 12, 25), (2051, 1, 1), (2051, 2, 13), (2051, 2, 14),
    (2051, 3, 31), (2051, 4, 21), (2051, 5, 1), (2051, 6, 1),
    (2051, 9, 7), (2051, 10, 12), (2051, 11, 2), (2051, 11, 15),
    (2051, 11, 20), (2051, 12, 25), (2052, 1, 1), (2052, 3, 4),
    (2052, 3, 5), (2052, 4, 19), (2052, 4, 21), (2052, 5, 1),
    (2052, 6, 20), (2052, 9, 7), (2052, 10, 12), (2052, 11, 2),
    (2052, 11, 15), (2052, 11, 20), (2052, 12, 25), (2053, 1, 1),
    (2053, 2, 17), (2053, 2, 18), (2053, 4, 4), (2053, 4, 21),
    (2053, 5, 1), (2053, 6, 5), (2053, 9, 7), (2053, 10, 12),
    (2053, 11, 2), (2053, 11, 15), (2053, 11, 20), (2053, 12, 25),
    (2054, 1, 1), (2054, 2, 9), (2054, 2, 10), (2054, 3, 27),
    (2054, 4, 21), (2054, 5, 1), (2054, 5, 28), (2054, 9, 7),
    (2054, 10, 12), (2054, 11, 2), (2054, 11, 15), (2054, 11, 20),
    (2054, 12, 25), (2055, 1, 1), (2055, 3, 1), (2055, 3, 2),
    (2055, 4, 16), (2055, 4, 21), (2055, 5, 1), (2055, 6, 17),
    (2055, 9, 7), (2055, 10, 12), (2055, 11, 2), (2055, 11, 15),
    (2055, 11, 20), (2055, 12, 25), (2056, 1, 1), (2056, 2, 14),
    (2056, 2, 15), (2056, 3, 31), (2056, 4, 21), (2056, 5, 1),
    (2056, 6, 1), (2056, 9, 7), (2056, 10, 12), (2056, 11, 2),
    (2056, 11, 15), (2056, 11, 20), (2056, 12, 25), (2057, 1, 1),
    (2057, 3, 5), (2057, 3, 6), (2057, 4, 20), (2057, 4, 21),
    (2057, 5, 1), (2057, 6, 21), (2057, 9, 7), (2057, 10, 12),
    (2057, 11, 2), (2057, 11, 15), (2057, 11, 20), (2057, 12, 25),
    (2058, 1, 1), (2058, 2, 25), (2058, 2, 26), (2058, 4, 12),
    (2058, 4, 21), (2058, 5, 1), (2058, 6, 13), (2058, 9, 7),
    (2058, 10, 12), (2058, 11, 2), (2058, 11, 15), (2058, 11, 20),
    (2058, 12, 25), (2059, 1, 1), (2059, 2, 10), (2059, 2, 11),
    (2059, 3, 28), (2059, 4, 21), (2059, 5, 1), (2059, 5, 29),
    (2059, 9, 7), (2059, 10, 12), (2059, 11, 2), (2059, 11, 15),
    (2059, 11, 20), (2059, 12, 25), (2060, 1, 1), (2060, 3, 1),
    (2060, 3, 2), (2060, 4, 16), (2060, 4, 21), (2060, 5, 1),
    (2060, 6, 17), (2060, 9, 7), (2060, 10, 12), (2060, 11, 2),
    (2060, 11, 15), (2060, 11, 20), (2060, 12, 25), (2061, 1, 1),
    (2061, 2, 21), (2061, 2, 22), (2061, 4, 8), (2061, 4, 21),
    (2061, 5, 1), (2061, 6, 9), (2061, 9, 7), (2061, 10, 12),
    (2061, 11, 2), (2061, 11, 15), (2061, 11, 20), (2061, 12, 25),
    (2062, 1, 1), (2062, 2, 6), (2062, 2, 7), (2062, 3, 24),
    (2062, 4, 21), (2062, 5, 1), (2062, 5, 25), (2062, 9, 7),
    (2062, 10, 12), (2062, 11, 2), (2062, 11, 15), (2062, 11, 20),
    (2062, 12, 25), (2063, 1, 1), (2063, 2, 26), (2063, 2, 27),
    (2063, 4, 13), (2063, 4, 21), (2063, 5, 1), (2063, 6, 14),
    (2063, 9, 7), (2063, 10, 12), (2063, 11, 2), (2063, 11, 15),
    (2063, 11, 20), (2063, 12, 25), (2064, 1, 1), (2064, 2, 18),
    (2064, 2, 19), (2064, 4, 4), (2064, 4, 21), (2064, 5, 1),
    (2064, 6, 5), (2064, 9, 7), (2064, 10, 12), (2064, 11, 2),
    (2064, 11, 15), (2064, 11, 20), (2064, 12, 25), (2065, 1, 1),
    (2065, 2, 9), (2065, 2, 10), (2065, 3, 27), (2065, 4, 21),
    (2065, 5, 1), (2065, 5, 28), (2065, 9, 7), (2065, 10, 12),
    (2065, 11, 2), (2065, 11, 15), (2065, 11, 20), (2065, 12, 25),
    (2066, 1, 1), (2066, 2, 22), (2066, 2, 23), (2066, 4, 9),
    (2066, 4, 21), (2066, 5, 1), (2066, 6, 10), (2066, 9, 7),
    (2066, 10, 12), (2066, 11, 2), (2066, 11, 15), (2066, 11, 20),
    (2066, 12, 25), (2067, 1, 1), (2067, 2, 14), (2067, 2, 15),
    (2067, 4, 1), (2067, 4, 21), (2067, 5, 1), (2067, 6, 2),
    (2067, 9, 7), (2067, 10, 12), (2067, 11, 2), (2067, 11, 15),
    (2067, 11, 20), (2067, 12, 25), (2068, 1, 1), (2068, 3, 5),
    (2068, 3, 6), (2068, 4, 20), (2068, 4, 21), (2068, 5, 1),
    (2068, 6, 21), (2068, 9, 7), (2068, 10, 12), (2068, 11, 2),
    (2068, 11, 15), (2068, 11, 20), (2068, 12, 25), (2069, 1, 1),
    (2069, 2, 25), (2069, 2, 26), (2069, 4, 12), (2069, 4, 21),
    (2069, 5, 1), (2069, 6, 13), (2069, 9, 7), (2069, 10, 12),
    (2069, 11, 2), (2069, 11, 15), (2069, 11, 20), (2069, 12, 25),
    (2070, 1, 1), (2070, 2, 10), (2070, 2, 11), (2070, 3, 28),
    (2070, 4, 21), (2070, 5, 1), (2070, 5, 29), (2070, 9, 7),
    (2070, 10, 12), (2070, 11, 2), (2070, 11, 15), (2070, 11, 20),
    (2070, 12, 25), (2071, 1, 1), (2071, 3, 2), (2071, 3, 3),
    (2071, 4, 17), (2071, 4, 21), (2071, 5, 1), (2071, 6, 18),
    (2071, 9, 7), (2071, 10, 12), (2071, 11, 2), (2071, 11, 15),
    (2071, 11, 20), (2071, 12, 25), (2072, 1, 1), (2072, 2, 22),
    (2072, 2, 23), (2072, 4, 8), (2072, 4, 21), (2072, 5, 1),
    (2072, 6, 9), (2072, 9, 7), (2072, 10, 12), (2072, 11, 2),
    (2072, 11, 15), (2072, 11, 20), (2072, 12, 25), (2073, 1, 1),
    (2073, 2, 6), (2073, 2, 7), (2073, 3, 24), (2073, 4, 21),
    (2073, 5, 1), (2073, 5, 25), (2073, 9, 7), (2073, 10, 12),
    (2073, 11, 2), (2073, 11, 15), (2073, 11, 20), (2073, 12, 25),
    (2074, 1, 1), (2074, 2, 26), (2074, 2, 27), (2074, 4, 13),
    (2074, 4, 21), (2074, 5, 1), (2074, 6, 14), (2074, 9, 7),
    (2074, 10, 12), (2074, 11, 2), (2074, 11, 15), (2074, 11, 20),
    (2074, 12, 25), (2075, 1, 1), (2075, 2, 18), (2075, 2, 19),
    (2075, 4, 5), (2075, 4, 21), (2075, 5, 1), (2075, 6, 6),
    (2075, 9, 7), (2075, 10, 12), (2075, 11, 2), (2075, 11, 15),
    (2075, 11, 20), (2075, 12, 25), (2076, 1, 1), (2076, 3, 2),
    (2076, 3, 3), (2076, 4, 17), (2076, 4, 21), (2076, 5, 1),
    (2076, 6, 18), (2076, 9, 7), (2076, 10, 12), (2076, 11, 2),
    (2076, 11, 15), (2076, 11, 20), (2076, 12, 25), (2077, 1, 1),
    (2077, 2, 22), (2077, 2, 23), (2077, 4, 9), (2077, 4, 21),
    (2077, 5, 1), (2077, 6, 10), (2077, 9, 7), (2077, 10, 12),
    (2077, 11, 2), (2077, 11, 15), (2077, 11, 20), (2077, 12, 25),
    (2078, 1, 1), (2078, 2, 14), (2078, 2, 15), (2078, 4, 1),
    (2078, 4, 21), (2078, 5, 1), (2078, 6, 2), (2078, 9, 7),
    (2078, 10, 12), (2078, 11, 2), (2078, 11, 15), (2078, 11, 20),
    (2078, 12, 25), (2079, 1, 1), (2079, 3, 6), (2079, 3, 7),
    (2079, 4, 21), (2079, 4, 21), (2079, 5, 1), (2079, 6, 22),
    (2079, 9, 7), (2079, 10, 12), (2079, 11, 2), (2079, 11, 15),
    (2079, 11, 20), (2079, 12, 25), (2080, 1, 1), (2080, 2, 19),
    (2080, 2, 20), (2080, 4, 5), (2080, 4, 21), (2080, 5, 1),
    (2080, 6, 6), (2080, 9, 7), (2080, 10, 12), (2080, 11, 2),
    (2080, 11, 15), (2080, 11, 20), (2080, 12, 25), (2081, 1, 1),
    (2081, 2, 10), (2081, 2, 11), (2081, 3, 28), (2081, 4, 21),
    (2081, 5, 1), (2081, 5, 29), (2081, 9, 7), (2081, 10, 12),
    (2081, 11, 2), (2081, 11, 15), (2081, 11, 20), (2081, 12, 25),
    (2082, 1, 1), (2082, 3, 2), (2082, 3, 3), (2082, 4, 17),
    (2082, 4, 21), (2082, 5, 1), (2082, 6, 18), (2082, 9, 7),
    (2082, 10, 12), (2082, 11, 2), (2082, 11, 15), (2082, 11, 20),
    (2082, 12, 25), (2083, 1, 1), (2083, 2, 15), (2083, 2, 16),
    (2083, 4, 2), (2083, 4, 21), (2083, 5, 1), (2083, 6, 3),
    (2083, 9, 7), (2083, 10, 12), (2083, 11, 2), (2083, 11, 15),
    (2083, 11, 20), (2083, 12, 25), (2084, 1, 1), (2084, 2, 7),
    (2084, 2, 8), (2084, 3, 24), (2084, 4, 21), (2084, 5, 1),
    (2084, 5, 25), (2084, 9, 7), (2084, 10, 12), (2084, 11, 2),
    (2084, 11, 15), (2084, 11, 20), (2084, 12, 25), (2085, 1, 1),
    (2085, 2, 26), (2085, 2, 27), (2085, 4, 13), (2085, 4, 21),
    (2085, 5, 1), (2085, 6, 14), (2085, 9, 7), (2085, 10, 12),
    (2085, 11, 2), (2085, 11, 15), (2085, 11, 20), (2085, 12, 25),
    (2086, 1, 1), (2086, 2, 11), (2086, 2, 12), (2086, 3, 29),
    (2086, 4, 21), (2086, 5, 1), (2086, 5, 30), (2086, 9, 7),
    (2086, 10, 12), (2086, 11, 2), (2086, 11, 15), (2086, 11, 20),
    (2086, 12, 25), (2087, 1, 1), (2087, 3, 3), (2087, 3, 4),
    (2087, 4, 18), (2087, 4, 21), (2087, 5, 1), (2087, 6, 19),
    (2087, 9, 7), (2087, 10, 12), (2087, 11, 2), (2087, 11, 15),
    (2087, 11, 20), (2087, 12, 25), (2088, 1, 1), (2088, 2, 23),
    (2088, 2, 24), (2088, 4, 9), (2088, 4, 21), (2088, 5, 1),
    (2088, 6, 10), (2088, 9, 7), (2088, 10, 12), (2088, 11, 2),
    (2088, 11, 15), (2088, 11, 20), (2088, 12, 25), (2089, 1, 1),
    (2089, 2, 14), (2089, 2, 15), (2089, 4, 1), (2089, 4, 21),
    (2089, 5, 1), (2089, 6, 2), (2089, 9, 7), (2089, 10, 12),
    (2089, 11, 2), (2089, 11, 15), (2089, 11, 20), (2089, 12, 25),
    (2090, 1, 1), (2090, 2, 27), (2090, 2, 28), (2090, 4, 14),
    (2090, 4, 21), (2090, 5, 1), (2090, 6, 15), (2090, 9, 7),
    (2090, 10, 12), (2090, 11, 2), (2090, 11, 15), (2090, 11, 20),
    (2090, 12, 25), (2091, 1, 1), (2091, 2, 19), (2091, 2, 20),
    (2091, 4, 6), (2091, 4, 21), (2091, 5, 1), (2091, 6, 7),
    (2091, 9, 7), (2091, 10, 12), (2091, 11, 2), (2091, 11, 15),
    (2091, 11, 20), (2091, 12, 25), (2092, 1, 1), (2092, 2, 11),
    (2092, 2, 12), (2092, 3, 28), (2092, 4, 21), (2092, 5, 1),
    (2092, 5, 29), (2092, 9, 7), (2092, 10, 12), (2092, 11, 2),
    (2092, 11, 15), (2092, 11, 20), (2092, 12, 25), (2093, 1, 1),
    (2093, 2, 23), (2093, 2, 24), (2093, 4, 10), (2093, 4, 21),
    (2093, 5, 1), (2093, 6, 11), (2093, 9, 7), (2093, 10, 12),
    (2093, 11, 2), (2093, 11, 15), (2093, 11, 20), (2093, 12, 25),
    (2094, 1, 1), (2094, 2, 15), (2094, 2, 16), (2094, 4, 2),
    (2094, 4, 21), (2094, 5, 1), (2094, 6, 3), (2094, 9, 7),
    (2094, 10, 12), (2094, 11, 2), (2094, 11, 15), (2094, 11, 20),
    (2094, 12, 25),
];
