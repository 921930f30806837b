use phf::{Map, phf_map};

/// Pauling electronegativities. Noble gases carry Allen-scale estimates so
/// every supported element has a usable ordering key.
static ELECTRONEGATIVITY: Map<&'static str, f64> = phf_map! {
    "H" => 2.20, "He" => 4.16,
    "Li" => 0.98, "Be" => 1.57, "B" => 2.04, "C" => 2.55, "N" => 3.04,
    "O" => 3.44, "F" => 3.98, "Ne" => 4.79,
    "Na" => 0.93, "Mg" => 1.31, "Al" => 1.61, "Si" => 1.90, "P" => 2.19,
    "S" => 2.58, "Cl" => 3.16, "Ar" => 3.24,
    "K" => 0.82, "Ca" => 1.00, "Sc" => 1.36, "Ti" => 1.54, "V" => 1.63,
    "Cr" => 1.66, "Mn" => 1.55, "Fe" => 1.83, "Co" => 1.88, "Ni" => 1.91,
    "Cu" => 1.90, "Zn" => 1.65, "Ga" => 1.81, "Ge" => 2.01, "As" => 2.18,
    "Se" => 2.55, "Br" => 2.96, "Kr" => 3.00,
    "Rb" => 0.82, "Sr" => 0.95, "Y" => 1.22, "Zr" => 1.33, "Nb" => 1.60,
    "Mo" => 2.16, "Tc" => 1.90, "Ru" => 2.20, "Rh" => 2.28, "Pd" => 2.20,
    "Ag" => 1.93, "Cd" => 1.69, "In" => 1.78, "Sn" => 1.96, "Sb" => 2.05,
    "Te" => 2.10, "I" => 2.66, "Xe" => 2.60,
    "Cs" => 0.79, "Ba" => 0.89,
    "La" => 1.10, "Ce" => 1.12, "Pr" => 1.13, "Nd" => 1.14, "Pm" => 1.13,
    "Sm" => 1.17, "Eu" => 1.20, "Gd" => 1.20, "Tb" => 1.10, "Dy" => 1.22,
    "Ho" => 1.23, "Er" => 1.24, "Tm" => 1.25, "Yb" => 1.10, "Lu" => 1.27,
    "Hf" => 1.30, "Ta" => 1.50, "W" => 2.36, "Re" => 1.90, "Os" => 2.20,
    "Ir" => 2.20, "Pt" => 2.28, "Au" => 2.54, "Hg" => 2.00,
    "Tl" => 1.62, "Pb" => 2.33, "Bi" => 2.02, "Po" => 2.00, "At" => 2.20,
    "Rn" => 2.20,
    "Fr" => 0.70, "Ra" => 0.90, "Ac" => 1.10, "Th" => 1.30, "Pa" => 1.50,
    "U" => 1.38, "Np" => 1.36, "Pu" => 1.28,
};

/// Oxidation states observed in inorganic crystal structures, with their
/// occurrence counts. Elements absent from the table have no recorded states.
static OXIDATION_OCCURRENCES: Map<&'static str, &'static [(i8, u32)]> = phf_map! {
    "H" => &[(-1, 2815), (1, 20870)],
    "Li" => &[(1, 11742)],
    "Be" => &[(2, 1432)],
    "B" => &[(-3, 17), (3, 8796)],
    "C" => &[(-4, 529), (2, 361), (4, 9522)],
    "N" => &[(-3, 6322), (3, 402), (5, 1920)],
    "O" => &[(-2, 150824)],
    "F" => &[(-1, 24640)],
    "Na" => &[(1, 15613)],
    "Mg" => &[(2, 12356)],
    "Al" => &[(3, 15132)],
    "Si" => &[(-4, 162), (4, 17385)],
    "P" => &[(-3, 336), (3, 528), (5, 16024)],
    "S" => &[(-2, 12016), (4, 1210), (6, 6794)],
    "Cl" => &[(-1, 17418), (5, 62), (7, 142)],
    "K" => &[(1, 13463)],
    "Ca" => &[(2, 14091)],
    "Sc" => &[(3, 1995)],
    "Ti" => &[(2, 226), (3, 1745), (4, 8556)],
    "V" => &[(2, 321), (3, 1906), (4, 2624), (5, 4801)],
    "Cr" => &[(2, 486), (3, 4437), (4, 259), (5, 121), (6, 1542)],
    "Mn" => &[(2, 5784), (3, 2558), (4, 2282), (6, 75), (7, 171)],
    "Fe" => &[(2, 7674), (3, 8927)],
    "Co" => &[(2, 5310), (3, 2659)],
    "Ni" => &[(2, 6093), (3, 408)],
    "Cu" => &[(1, 2086), (2, 6727)],
    "Zn" => &[(2, 8614)],
    "Ga" => &[(1, 87), (3, 4221)],
    "Ge" => &[(2, 294), (4, 2874)],
    "As" => &[(-3, 164), (3, 1426), (5, 2872)],
    "Se" => &[(-2, 4243), (4, 1748), (6, 794)],
    "Br" => &[(-1, 6573), (5, 48)],
    "Rb" => &[(1, 3701)],
    "Sr" => &[(2, 8272)],
    "Y" => &[(3, 5063)],
    "Zr" => &[(4, 5996)],
    "Nb" => &[(3, 245), (4, 643), (5, 4582)],
    "Mo" => &[(3, 227), (4, 926), (5, 650), (6, 3874)],
    "Tc" => &[(4, 64), (7, 85)],
    "Ru" => &[(3, 338), (4, 512)],
    "Rh" => &[(3, 471)],
    "Pd" => &[(2, 741)],
    "Ag" => &[(1, 3937)],
    "Cd" => &[(2, 3956)],
    "In" => &[(1, 202), (3, 3953)],
    "Sn" => &[(2, 1154), (4, 3570)],
    "Sb" => &[(-3, 141), (3, 2217), (5, 1868)],
    "Te" => &[(-2, 2481), (4, 2165), (6, 573)],
    "I" => &[(-1, 5059), (5, 361), (7, 64)],
    "Cs" => &[(1, 5085)],
    "Ba" => &[(2, 11574)],
    "La" => &[(3, 8182)],
    "Ce" => &[(3, 3556), (4, 1559)],
    "Pr" => &[(3, 1890)],
    "Nd" => &[(3, 3220)],
    "Sm" => &[(3, 2088)],
    "Eu" => &[(2, 1145), (3, 1729)],
    "Gd" => &[(3, 2588)],
    "Dy" => &[(3, 1560)],
    "Er" => &[(3, 1527)],
    "Yb" => &[(2, 232), (3, 1096)],
    "Lu" => &[(3, 590)],
    "Hf" => &[(4, 1204)],
    "Ta" => &[(5, 2916)],
    "W" => &[(4, 312), (5, 294), (6, 3964)],
    "Re" => &[(4, 341), (6, 218), (7, 744)],
    "Os" => &[(4, 286), (6, 102)],
    "Ir" => &[(3, 128), (4, 279)],
    "Pt" => &[(2, 560), (4, 624)],
    "Au" => &[(1, 289), (3, 476)],
    "Hg" => &[(1, 331), (2, 1452)],
    "Tl" => &[(1, 1361), (3, 912)],
    "Pb" => &[(2, 4848), (4, 846)],
    "Bi" => &[(3, 4294), (5, 290)],
    "Th" => &[(4, 1382)],
    "U" => &[(4, 1064), (5, 237), (6, 1986)],
};

pub fn is_known_element(symbol: &str) -> bool {
    ELECTRONEGATIVITY.contains_key(symbol.trim())
}

pub fn electronegativity(symbol: &str) -> Option<f64> {
    ELECTRONEGATIVITY.get(symbol.trim()).copied()
}

/// Recorded (oxidation state, occurrence count) pairs for an element, in
/// ascending state order. Empty for elements with no recorded states.
pub fn oxidation_occurrences(symbol: &str) -> &'static [(i8, u32)] {
    OXIDATION_OCCURRENCES
        .get(symbol.trim())
        .copied()
        .unwrap_or(&[])
}
