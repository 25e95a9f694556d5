//! Built-in vocabulary tables.
//!
//! Alias keys are lower-case and trimmed; lookups normalize the raw name the
//! same way before probing. Category keys are exact panel labels.

/// Vendor test name (lower-case) -> canonical metric name.
pub const METRIC_ALIASES: &[(&str, &str)] = &[
    // Thyroid
    ("free t4 (direct)", "Free T4"),
    ("free t4", "Free T4"),
    ("t4, free", "Free T4"),
    ("tsh", "TSH"),
    ("thyroid stimulating hormone", "TSH"),
    ("triiodothyronine (t3), free", "Free T3"),
    ("free t3", "Free T3"),
    ("t3, free", "Free T3"),
    ("total t3", "Total T3"),
    ("total t3 (triiodothyronine)", "Total T3"),
    ("thyroxine", "Total T4"),
    ("total t4 (thyroxine)", "Total T4"),
    // Lipids
    ("ldl chol calc (nih)", "LDL-C"),
    ("ldl cholesterol (calculated, nih)", "LDL-C"),
    ("ldl (calculated)", "LDL-C"),
    ("direct ldl", "LDL-C"),
    ("hdl cholesterol", "HDL-C"),
    ("hdl", "HDL-C"),
    ("cholesterol, total", "Total Cholesterol"),
    ("total cholesterol", "Total Cholesterol"),
    ("cholesterol", "Total Cholesterol"),
    ("vldl cholesterol (calculated)", "VLDL-C"),
    ("vldl cholesterol (calc)", "VLDL-C"),
    ("vldl", "VLDL-C"),
    // CBC
    ("hemoglobin", "Hemoglobin"),
    ("hgb", "Hemoglobin"),
    ("hematocrit", "Hematocrit"),
    ("hct", "Hematocrit"),
    ("platelets", "Platelets"),
    ("plt", "Platelets"),
    ("lymphs", "Lymphocytes %"),
    ("lymphocytes", "Lymphocytes %"),
    ("ly%", "Lymphocytes %"),
    ("lymphs (absolute)", "Lymphocytes Abs"),
    ("lymphocytes (absolute)", "Lymphocytes Abs"),
    ("ly#", "Lymphocytes Abs"),
    ("neutrophils", "Neutrophils %"),
    ("ne%", "Neutrophils %"),
    ("neutrophils %", "Neutrophils %"),
    ("neutrophils (absolute)", "Neutrophils Abs"),
    ("ne#", "Neutrophils Abs"),
    ("monocytes", "Monocytes %"),
    ("mo%", "Monocytes %"),
    ("monocytes (absolute)", "Monocytes Abs"),
    ("mo#", "Monocytes Abs"),
    ("eosinophils", "Eosinophils %"),
    ("eo%", "Eosinophils %"),
    ("eos (absolute)", "Eosinophils Abs"),
    ("eosinophils (absolute)", "Eosinophils Abs"),
    ("eo#", "Eosinophils Abs"),
    ("basophils", "Basophils %"),
    ("ba%", "Basophils %"),
    ("baso (absolute)", "Basophils Abs"),
    ("basophils (absolute)", "Basophils Abs"),
    ("ba#", "Basophils Abs"),
    ("immature grans (absolute)", "Immature Granulocytes Abs"),
    ("immature granulocytes (absolute)", "Immature Granulocytes Abs"),
    ("rdw", "RDW"),
    ("rdw_cv", "RDW"),
    ("neut/lymph ratio", "NLR"),
    ("neutrophil/lymphocyte ratio", "NLR"),
    // Metabolic
    ("bun", "BUN"),
    ("blood urea nitrogen", "BUN"),
    ("egfr", "eGFR"),
    ("egfr (male)", "eGFR"),
    ("carbon dioxide, total", "CO2"),
    ("co2", "CO2"),
    ("bicarbonate", "CO2"),
    ("protein, total", "Total Protein"),
    ("total protein", "Total Protein"),
    ("bilirubin, total", "Total Bilirubin"),
    ("total bilirubin", "Total Bilirubin"),
    ("ast (sgot)", "AST"),
    ("ast", "AST"),
    ("aspartate aminotransferase", "AST"),
    ("alt (sgpt)", "ALT"),
    ("alt", "ALT"),
    ("alanine aminotransferase", "ALT"),
    ("globulin, total", "Globulin"),
    ("globulin", "Globulin"),
    ("chloride", "Chloride"),
    ("cl-c", "Chloride"),
    ("a/g ratio", "A/G Ratio"),
    ("albumin/globulin ratio", "A/G Ratio"),
    // Hormones
    ("testosterone", "Total Testosterone"),
    ("testosterone total", "Total Testosterone"),
    ("total testosterone", "Total Testosterone"),
    ("free testosterone (direct)", "Free Testosterone"),
    ("free testosterone", "Free Testosterone"),
    ("sex hormone binding globulin (shbg), serum", "SHBG"),
    ("sex hormone binding globulin", "SHBG"),
    ("dhea-sulfate", "DHEA-S"),
    ("dhea-s", "DHEA-S"),
    ("insulin-like growth factor i (igf-1)", "IGF-1"),
    ("prostate specific ag (psa)", "Total PSA"),
    ("prostate specific antigen (psa)", "Total PSA"),
    ("total psa", "Total PSA"),
    ("follicle-stimulating hormone", "FSH"),
    ("fsh", "FSH"),
    ("luteinizing hormone", "LH"),
    ("lh", "LH"),
    // A1c
    ("hemoglobin a1c", "HbA1c"),
];

/// Panel label as printed on the report -> category.
pub const CATEGORY_OVERRIDES: &[(&str, &str)] = &[
    ("Hormones / Other", "Hormones"),
    ("FSH and LH", "Hormones"),
    ("Free Testosterone", "Hormones"),
    ("Free Testosterone (Direct)", "Hormones"),
    ("DHEA-Sulfate", "Hormones"),
    ("DHEA-S", "Hormones"),
    ("Testosterone", "Hormones"),
    ("Prolactin", "Hormones"),
    ("Estradiol", "Hormones"),
    ("IGF-1", "Hormones"),
    ("Cortisol", "Hormones"),
    ("Follicle-Stimulating Hormone", "Hormones"),
    ("Luteinizing Hormone", "Hormones"),
    ("PSA", "Hormones"),
    ("Free PSA", "Hormones"),
    ("Total PSA", "Hormones"),
    ("SHBG", "Hormones"),
    ("TSH and Free T4", "Thyroid"),
    ("T3, Free", "Thyroid"),
    ("T4, Free", "Thyroid"),
    ("Thyroid Stimulating Hormone", "Thyroid"),
    ("Total T3 (Triiodothyronine)", "Thyroid"),
    ("Total T4 (Thyroxine)", "Thyroid"),
    ("Free T3", "Thyroid"),
    ("Ferritin", "Iron Studies"),
    ("Lipid Panel", "Lipids"),
    ("Lipid Panel with LDL/HDL Ratio", "Lipids"),
    ("CBC with Diff, Platelet, NLR", "CBC"),
    ("CBC with Platelet Count and Auto Diff", "CBC"),
    ("CBC with Auto Differential", "CBC"),
    ("Comprehensive Metabolic Panel (14)", "Metabolic Panel"),
    ("Comprehensive Metabolic Panel", "Metabolic Panel"),
    ("Hemoglobin A1c", "Metabolic Panel"),
    ("Insulin, Random", "Metabolic Panel"),
    ("Cardiac CRP", "Inflammation"),
    ("Magnesium", "Minerals"),
    ("Phosphorus", "Minerals"),
    ("Vitamin B12", "Vitamins"),
    ("Vitamin D25-OH", "Vitamins"),
];

/// Canonical metric name -> short clinical description.
pub const METRIC_DESCRIPTIONS: &[(&str, &str)] = &[
    // Thyroid
    (
        "TSH",
        "Thyroid Stimulating Hormone. Controls thyroid gland function. High values may indicate hypothyroidism; low values may indicate hyperthyroidism.",
    ),
    (
        "Free T4",
        "Free Thyroxine. The active form of T4 available to tissues.",
    ),
    (
        "Free T3",
        "Free Triiodothyronine. The most active thyroid hormone; regulates metabolism and heart rate.",
    ),
    ("Total T3", "Total Triiodothyronine, bound and free."),
    ("Total T4", "Total Thyroxine, bound and free."),
    // Lipids
    (
        "Total Cholesterol",
        "Total cholesterol in blood, including HDL, LDL and VLDL.",
    ),
    (
        "LDL-C",
        "Low-Density Lipoprotein Cholesterol. High levels increase cardiovascular risk.",
    ),
    (
        "HDL-C",
        "High-Density Lipoprotein Cholesterol. Higher levels are protective.",
    ),
    (
        "VLDL-C",
        "Very Low-Density Lipoprotein Cholesterol. Carries triglycerides.",
    ),
    (
        "Triglycerides",
        "Fat in blood. High levels increase risk of heart disease and pancreatitis.",
    ),
    // CBC
    (
        "WBC",
        "White Blood Cell count. High values may indicate infection or inflammation.",
    ),
    (
        "RBC",
        "Red Blood Cell count. Low values indicate anemia.",
    ),
    (
        "Hemoglobin",
        "Oxygen-carrying protein in red blood cells. Low levels indicate anemia.",
    ),
    (
        "Hematocrit",
        "Share of blood volume made up of red blood cells.",
    ),
    (
        "RDW",
        "Red Cell Distribution Width. Variation in red blood cell size.",
    ),
    (
        "Platelets",
        "Clotting cells. Low values increase bleeding risk; high values increase clotting risk.",
    ),
    (
        "Neutrophils %",
        "Share of white blood cells that are neutrophils.",
    ),
    ("Neutrophils Abs", "Absolute neutrophil count."),
    (
        "Lymphocytes %",
        "Share of white blood cells that are lymphocytes.",
    ),
    ("Lymphocytes Abs", "Absolute lymphocyte count."),
    (
        "Monocytes %",
        "Share of white blood cells that are monocytes.",
    ),
    ("Monocytes Abs", "Absolute monocyte count."),
    (
        "Eosinophils %",
        "Share of white blood cells that are eosinophils. Elevated in allergies.",
    ),
    ("Eosinophils Abs", "Absolute eosinophil count."),
    (
        "Basophils %",
        "Share of white blood cells that are basophils.",
    ),
    ("Basophils Abs", "Absolute basophil count."),
    (
        "NLR",
        "Neutrophil-to-Lymphocyte Ratio. Marker of systemic inflammation.",
    ),
    // Metabolic
    (
        "Glucose",
        "Blood sugar. Elevated fasting glucose may indicate diabetes or prediabetes.",
    ),
    (
        "BUN",
        "Blood Urea Nitrogen. Elevated values may indicate kidney dysfunction.",
    ),
    (
        "Creatinine",
        "Muscle metabolism waste product used to assess kidney function.",
    ),
    (
        "eGFR",
        "Estimated Glomerular Filtration Rate. Lower values indicate reduced kidney function.",
    ),
    ("Chloride", "Electrolyte that helps maintain fluid and acid-base balance."),
    ("CO2", "Carbon dioxide / bicarbonate. Reflects acid-base balance."),
    ("Total Protein", "Albumin plus globulin proteins in blood."),
    ("Globulin", "Protein group including antibodies."),
    ("A/G Ratio", "Albumin to Globulin ratio."),
    (
        "Total Bilirubin",
        "Hemoglobin breakdown product. Elevated levels may indicate liver problems.",
    ),
    (
        "AST",
        "Aspartate Aminotransferase. Elevated in liver damage or muscle injury.",
    ),
    (
        "ALT",
        "Alanine Aminotransferase. More liver-specific than AST.",
    ),
    // Hormones
    (
        "Total Testosterone",
        "Primary male sex hormone. Important for muscle mass, bone density and libido.",
    ),
    (
        "Free Testosterone",
        "Unbound testosterone available to tissues.",
    ),
    (
        "SHBG",
        "Sex Hormone Binding Globulin. Binds testosterone and estradiol.",
    ),
    ("Estradiol", "Primary female sex hormone, present in both sexes."),
    ("FSH", "Follicle Stimulating Hormone. Regulates reproductive function."),
    ("LH", "Luteinizing Hormone. Triggers testosterone production and ovulation."),
    ("DHEA-S", "Dehydroepiandrosterone Sulfate. Declines with age."),
    ("IGF-1", "Insulin-Like Growth Factor 1. Mediates growth hormone effects."),
    ("Total PSA", "Prostate Specific Antigen. Marker for prostate health."),
    // A1c
    (
        "HbA1c",
        "Hemoglobin A1c. Average blood sugar over the previous 2-3 months.",
    ),
    // Other
    (
        "Ferritin",
        "Iron storage protein. Low values indicate iron deficiency.",
    ),
    (
        "Cardiac CRP",
        "High-sensitivity C-Reactive Protein. Marker of inflammation and cardiovascular risk.",
    ),
    ("Vitamin B12", "Needed for nerve function and red blood cell production."),
    ("Vitamin D25-OH", "25-Hydroxyvitamin D. Measures vitamin D status."),
];
