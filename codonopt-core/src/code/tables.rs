// NCBI translation tables (https://ftp.ncbi.nih.gov/entrez/misc/data/gc.prt).
// Each row is in NCBI's T/C/A/G order for each codon position.

pub(crate) struct NcbiTable {
    pub id: u8,
    pub name: &'static str,
    pub ncbieaa: &'static [u8; 64],
}

pub const DEFAULT_TABLE_ID: u8 = 11;

pub(crate) const TABLES: &[NcbiTable] = &[
    NcbiTable {
        id: 1,
        name: "Standard",
        ncbieaa: b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 2,
        name: "Vertebrate Mitochondrial",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 3,
        name: "Yeast Mitochondrial",
        ncbieaa: b"FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 4,
        name: "Mold, Protozoan, and Coelenterate Mitochondrial; Mycoplasma; Spiroplasma",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 5,
        name: "Invertebrate Mitochondrial",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 6,
        name: "Ciliate, Dasycladacean and Hexamita Nuclear",
        ncbieaa: b"FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 9,
        name: "Echinoderm and Flatworm Mitochondrial",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 10,
        name: "Euplotid Nuclear",
        ncbieaa: b"FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 11,
        name: "Bacterial, Archaeal and Plant Plastid",
        ncbieaa: b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 12,
        name: "Alternative Yeast Nuclear",
        ncbieaa: b"FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 13,
        name: "Ascidian Mitochondrial",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 14,
        name: "Alternative Flatworm Mitochondrial",
        ncbieaa: b"FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 15,
        name: "Blepharisma Macronuclear",
        ncbieaa: b"FFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 16,
        name: "Chlorophycean Mitochondrial",
        ncbieaa: b"FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 21,
        name: "Trematode Mitochondrial",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 22,
        name: "Scenedesmus obliquus Mitochondrial",
        ncbieaa: b"FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 23,
        name: "Thraustochytrium Mitochondrial",
        ncbieaa: b"FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 24,
        name: "Rhabdopleuridae Mitochondrial",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 25,
        name: "Candidate Division SR1 and Gracilibacteria",
        ncbieaa: b"FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 26,
        name: "Pachysolen tannophilus Nuclear",
        ncbieaa: b"FFLLSSSSYY**CC*WLLLAPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 27,
        name: "Karyorelict Nuclear",
        ncbieaa: b"FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 28,
        name: "Condylostoma Nuclear",
        ncbieaa: b"FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 29,
        name: "Mesodinium Nuclear",
        ncbieaa: b"FFLLSSSSYYYYCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 30,
        name: "Peritrich Nuclear",
        ncbieaa: b"FFLLSSSSYYEECC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 31,
        name: "Blastocrithidia Nuclear",
        ncbieaa: b"FFLLSSSSYYEECCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 32,
        name: "Balanophoraceae Plastid",
        ncbieaa: b"FFLLSSSSYY*WCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    },
    NcbiTable {
        id: 33,
        name: "Cephalodiscidae Mitochondrial",
        ncbieaa: b"FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG",
    },
];

pub(crate) fn find(id: u8) -> Option<&'static NcbiTable> {
    TABLES.iter().find(|t| t.id == id)
}

/// NCBI row position (T/C/A/G order) → codon index in A/C/G/T order.
#[inline]
pub(crate) fn ncbi_to_acgt(i: usize) -> usize {
    // T C A G → 3 1 0 2
    const REMAP: [usize; 4] = [3, 1, 0, 2];
    (REMAP[i >> 4] << 4) | (REMAP[(i >> 2) & 3] << 2) | REMAP[i & 3]
}
