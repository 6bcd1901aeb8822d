use super::sample::{Mode, Sample};

pub const SENTENCE: &str = "The brown dog jumped over the lazy fox or something like that";

pub const DNA: &str = concat!(
    "TGATGATGAAGACATCAGCATTGAAGGGCTGATGGAACACATCCCGGGGCCGGAC",
    "TTCCCGACGGCGGCAATCATTAACGGTCGTCGCGGTATTGAAGAAGCTTACCGTA",
    "CCGGTCGCGGCAAGGTGTATATCCGCGCTCGCGCAGAAGTGGAAGTTGACGCCAA",
    "CCGGTCGTGAAACCATTATCGTCCACGAAATTCCGTATCAGGTAAACAAAGCGAA",
    "CGCCTGATCGAGAAGATTGCGGAACTGGTAAAAGAAAAACGCGTGGAAGGCATCA",
    "GCGCGCTGCGTGACGAGTCTGACAAAGACGGTATGCGCATCGTGATTGAAGTGAA",
    "ACGCGATGCGGTCGGTGAAGTTGTGCTCAACAACCTCTACTCCCAGACCCAGTTG",
    "CAGGTTTCTTTCGGTATCAACATGGTGGCATTGCACCATGGTCAGCCGAAGATCA",
    "TGAACCTGAAAGACATCATCGCGGCGTTTGTTCGTCACCGCCGTGAAGTGGTGAC",
    "CCGTCGTACTATTTTCGAACTGCGTAAAGCTCGCGATCGTGCTCATATCCTTGAA",
    "GCATTAGCCGTGGCGCTGGCGAACATCGACCCGATCATCGAACTGATCCGTCATG",
    "CGCCGACGCCTGCAGAAGCGAAAACTGCGCTGGTTGCTAATCCGTGGCAGCTGGG",
    "CAACGTTGCCGCGATGCTCGAACGTGCTGGCGACGATGCTGCGCGTCCGGAATGG",
    "CTGGAGCCAGAGTTCGGCGTGCGTGATGGTCTGTACTACCTGACCGAACAGCAAG",
    "CTCAGGCGATTCTGGATCTGCGTTTGCAGAAACTGACCGGTCTTGAGCACGAAAA",
    "ACTGCTCGACGAATACAAAGAGCTGCTGGATCAGATCGCGGAACTGTTGCGTATT",
    "CTTGGTAGCGCCGATCGTCTGATGGAAGTGATCCGTGAAGAGCTGGAGCTGGTTC",
    "GTGAACAGTTCGGTGACAAACGTCGTACTGAAATCACCGCCAACAGCGCAGACAT",
);

/// Contains U+FB01, so it only fits the seeded alphabet as UTF-8 bytes.
pub const LINEAR_PROGRAMMING: &str = concat!(
    "Linear programming, surprisingly, is not directly related to ",
    "computer programming. The term was introduced in the 1950s when ",
    "computers were few and mostly top secret, and the word programming ",
    "was a military term that, at that time, referred to plans or ",
    "schedules for training, logistical supply, or deployment of men. ",
    "The word linear suggests that feasible plans are restricted by ",
    "linear constraints (inequalities), and also that the quality of the ",
    "plan (e.g., costs or duration) is also measured by a linear ",
    "function of the considered quantities. In a similar spirit, linear ",
    "programming soon started to be used for planning all kinds of ",
    "economic activities, such as transport of raw materials and ",
    "products among factories, sowing various crop plants, or cutting ",
    "paper rolls into shorter ones in sizes ordered by customers. The ",
    "phrase planning with linear constraints would perhaps better ",
    "capture this original meaning of linear programming. However, the ",
    "term linear programming has been well established for many years, ",
    "and at the same time, it has acquired a considerably broader ",
    "meaning: Not only does it play a role only in mathematical economy, ",
    "it appears frequently in computer science and in many other ﬁelds.",
);

/// The classic round-trip cases, in the order they are reported.
pub fn builtin_samples() -> Vec<Sample> {
    let literals = [
        "",
        "A",
        "AA",
        "AAA",
        "AB",
        "ABA",
        "ABBA",
        "ABBBBBBBBBBBBBBBBBA",
        "AAAAAAAAAAAAAAAAAAA",
        "ABCABCABCABCABCABC",
        SENTENCE,
        DNA,
    ];

    let mut samples: Vec<Sample> = literals
        .iter()
        .enumerate()
        .map(|(i, text)| Sample::from_text(format!("case-{}", i + 1), text, Mode::Text))
        .collect();

    samples.push(Sample::from_text("linear-programming", LINEAR_PROGRAMMING, Mode::Bytes));
    samples.push(Sample::from_text(
        "linear-programming-x16",
        &LINEAR_PROGRAMMING.repeat(16),
        Mode::Bytes,
    ));

    samples
}
