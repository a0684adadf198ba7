use super::document::{ProjectDocument, Record};
use super::KnowledgeText;

pub const PROJECT_DATA_SEPARATOR: &str = "\n\n--- PROJECT DATA ---\n";
pub const PROJECT_HEADER: &str = "\n**Current Project Details:**";
pub const IMPACT_HEADER: &str = "\n**Environmental Impact Results:**";
pub const CIRCULARITY_HEADER: &str = "\n**Circularity Metrics:**";
pub const EXTRACTION_HEADER: &str = "\n**Extraction Process Data:**";
pub const SMELTING_HEADER: &str = "\n**Smelting Process Data:**";

/// (label, key, unit suffix)
type FieldSpec = (&'static str, &'static str, &'static str);

const PROJECT_FIELDS: &[FieldSpec] = &[
    ("Project Name", "projectName", ""),
    ("Metal Type", "metalType", ""),
    ("Goal", "goal", ""),
    ("System Boundary", "systemBoundary", ""),
    ("Functional Unit", "functionalUnit", ""),
];

const IMPACT_FIELDS: &[FieldSpec] = &[
    (
        "Global Warming Potential",
        "globalWarmingPotential_kg_CO2_eq",
        " kg CO2 eq",
    ),
    (
        "Acidification Potential",
        "acidificationPotential_kg_SO2_eq",
        " kg SO2 eq",
    ),
    (
        "Eutrophication Potential",
        "eutrophicationPotential_kg_PO4_eq",
        " kg PO4 eq",
    ),
    ("Water Footprint", "waterFootprint_L", " L"),
    ("Energy Demand", "cumulativeEnergyDemand_MJ", " MJ"),
];

const CIRCULARITY_FIELDS: &[FieldSpec] = &[
    ("Circularity Score", "circularityScore_percent", "%"),
    ("Recycled Content", "recycledContent_percent", "%"),
    ("Material Recovery Rate", "materialRecoveryRate_percent", "%"),
    ("Landfill Rate", "landfillRate_percent", "%"),
];

const EXTRACTION_FIELDS: &[FieldSpec] = &[
    ("Metal", "metal", ""),
    ("Material Grade", "materialGrade", ""),
    ("Region", "region", ""),
    ("Method", "method", ""),
    (
        "Energy Consumption",
        "totalEnergyConsumption_kWh_perTon",
        " kWh/ton",
    ),
    ("Water Usage", "waterUsage_L_perTon", " L/ton"),
];

const SMELTING_FIELDS: &[FieldSpec] = &[
    ("Technology", "smeltingTech", ""),
    ("Operating Temperature", "operatingTemp_C", "°C"),
    (
        "Energy Consumption",
        "energyConsumption_kWh_perTon",
        " kWh/ton",
    ),
    ("Output Efficiency", "outputEfficiency_percent", "%"),
];

/// Renders the background text and project data into the knowledge text.
///
/// Pure and deterministic. Only the first `projects` and `results` entries are
/// used; impact and circularity blocks appear only alongside a project.
/// `extractions` and `smeltings` render every element, and their headers
/// appear whenever the key is present.
pub fn compile(static_text: &str, data: &ProjectDocument) -> KnowledgeText {
    let mut lines: Vec<String> = vec![static_text.to_string(), PROJECT_DATA_SEPARATOR.to_string()];

    if let Some(project) = data.first("projects") {
        lines.push(PROJECT_HEADER.to_string());
        push_fields(&mut lines, project, PROJECT_FIELDS);

        if let Some(results) = data.first("results") {
            lines.push(IMPACT_HEADER.to_string());
            let core = results.section("environmentalImpact").section("core");
            push_fields(&mut lines, core, IMPACT_FIELDS);

            lines.push(CIRCULARITY_HEADER.to_string());
            let metrics = results.section("circularity").section("metrics");
            push_fields(&mut lines, metrics, CIRCULARITY_FIELDS);
        }
    }

    if data.has_section("extractions") {
        lines.push(EXTRACTION_HEADER.to_string());
        for extraction in data.all("extractions") {
            push_fields(&mut lines, extraction, EXTRACTION_FIELDS);
        }
    }

    if data.has_section("smeltings") {
        lines.push(SMELTING_HEADER.to_string());
        for smelting in data.all("smeltings") {
            push_fields(&mut lines, smelting, SMELTING_FIELDS);
        }
    }

    KnowledgeText::new(lines.join("\n"))
}

fn push_fields(lines: &mut Vec<String>, record: Record<'_>, fields: &[FieldSpec]) {
    for (label, key, unit) in fields {
        lines.push(format!("- {label}: {}{unit}", record.field(key)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_document() -> ProjectDocument {
        ProjectDocument::new(json!({
            "projects": [
                {
                    "projectName": "Aluminium Can Study",
                    "metalType": "Aluminium",
                    "goal": "Compare primary and secondary routes",
                    "systemBoundary": "Cradle-to-gate",
                    "functionalUnit": "1 ton of ingot"
                },
                {"projectName": "Second Project"}
            ],
            "results": [
                {
                    "environmentalImpact": {
                        "core": {
                            "globalWarmingPotential_kg_CO2_eq": 11200,
                            "acidificationPotential_kg_SO2_eq": 48.5,
                            "eutrophicationPotential_kg_PO4_eq": 2.1,
                            "waterFootprint_L": 4500,
                            "cumulativeEnergyDemand_MJ": 152000
                        }
                    },
                    "circularity": {
                        "metrics": {
                            "circularityScore_percent": 62,
                            "recycledContent_percent": 35,
                            "materialRecoveryRate_percent": 80,
                            "landfillRate_percent": 12
                        }
                    }
                },
                {"circularity": {"metrics": {"circularityScore_percent": 1}}}
            ],
            "extractions": [
                {
                    "metal": "Bauxite",
                    "materialGrade": "45% Al2O3",
                    "region": "Odisha",
                    "method": "Open-pit",
                    "totalEnergyConsumption_kWh_perTon": 95,
                    "waterUsage_L_perTon": 300
                }
            ],
            "smeltings": [
                {
                    "smeltingTech": "Hall-Heroult",
                    "operatingTemp_C": 960,
                    "energyConsumption_kWh_perTon": 14000,
                    "outputEfficiency_percent": 93.5
                }
            ]
        }))
    }

    #[test]
    fn test_full_document_renders_every_section() {
        let text = compile("Background.", &full_document());
        let text = text.as_str();

        assert!(text.starts_with("Background.\n\n\n--- PROJECT DATA ---\n\n\n**Current Project Details:**\n"));
        assert!(text.contains("- Project Name: Aluminium Can Study\n"));
        assert!(text.contains("- Metal Type: Aluminium\n"));
        assert!(text.contains("- Functional Unit: 1 ton of ingot\n"));
        assert!(text.contains("- Global Warming Potential: 11200 kg CO2 eq\n"));
        assert!(text.contains("- Acidification Potential: 48.5 kg SO2 eq\n"));
        assert!(text.contains("- Water Footprint: 4500 L\n"));
        assert!(text.contains("- Energy Demand: 152000 MJ\n"));
        assert!(text.contains("- Circularity Score: 62%\n"));
        assert!(text.contains("- Landfill Rate: 12%\n"));
        assert!(text.contains("- Energy Consumption: 95 kWh/ton\n"));
        assert!(text.contains("- Water Usage: 300 L/ton\n"));
        assert!(text.contains("- Operating Temperature: 960°C\n"));
        assert!(text.ends_with("- Output Efficiency: 93.5%"));
    }

    #[test]
    fn test_only_first_project_and_result_used() {
        let text = compile("", &full_document());
        assert!(!text.as_str().contains("Second Project"));
        assert!(!text.as_str().contains("- Circularity Score: 1%"));
        assert_eq!(text.as_str().matches(PROJECT_HEADER).count(), 1);
    }

    #[test]
    fn test_section_order() {
        let text = compile("bg", &full_document());
        let text = text.as_str();
        let positions: Vec<usize> = [
            PROJECT_DATA_SEPARATOR,
            PROJECT_HEADER,
            IMPACT_HEADER,
            CIRCULARITY_HEADER,
            EXTRACTION_HEADER,
            SMELTING_HEADER,
        ]
        .iter()
        .map(|h| text.find(h).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_document_is_background_plus_separator() {
        let text = compile("Background.", &ProjectDocument::empty());
        assert_eq!(text.as_str(), "Background.\n\n\n--- PROJECT DATA ---\n");
    }

    #[test]
    fn test_no_projects_section_skips_project_block() {
        let doc = ProjectDocument::new(json!({
            "results": [{"circularity": {"metrics": {"circularityScore_percent": 50}}}],
            "smeltings": []
        }));
        let text = compile("bg", &doc);
        assert!(!text.as_str().contains("Current Project Details"));
        // Results are tied to a project and are skipped with it.
        assert!(!text.as_str().contains(IMPACT_HEADER));
        assert!(text.as_str().contains(SMELTING_HEADER));
    }

    #[test]
    fn test_empty_projects_array_skips_project_block() {
        let doc = ProjectDocument::new(json!({"projects": []}));
        assert!(!compile("bg", &doc).as_str().contains("Current Project Details"));
    }

    #[test]
    fn test_missing_goal_renders_placeholder() {
        let doc = ProjectDocument::new(json!({
            "projects": [{"projectName": "P", "metalType": "Copper"}]
        }));
        let text = compile("bg", &doc);
        assert!(text.as_str().lines().any(|l| l == "- Goal: N/A"));
        assert!(text.as_str().lines().any(|l| l == "- System Boundary: N/A"));
    }

    #[test]
    fn test_project_without_results_has_no_metrics() {
        let doc = ProjectDocument::new(json!({"projects": [{"projectName": "P"}]}));
        let text = compile("bg", &doc);
        assert!(!text.as_str().contains(IMPACT_HEADER));
        assert!(!text.as_str().contains(CIRCULARITY_HEADER));
    }

    #[test]
    fn test_result_without_impact_core_uses_placeholders() {
        let doc = ProjectDocument::new(json!({
            "projects": [{}],
            "results": [{}]
        }));
        let text = compile("bg", &doc);
        assert!(text
            .as_str()
            .contains("- Global Warming Potential: N/A kg CO2 eq"));
        assert!(text.as_str().contains("- Recycled Content: N/A%"));
    }

    #[test]
    fn test_extraction_blocks_match_input_order_and_count() {
        for n in [0usize, 1, 3, 25] {
            let extractions: Vec<_> = (0..n)
                .map(|i| json!({"metal": format!("metal-{i}")}))
                .collect();
            let doc = ProjectDocument::new(json!({"extractions": extractions}));
            let text = compile("bg", &doc);
            let text = text.as_str();

            assert_eq!(text.matches(EXTRACTION_HEADER).count(), 1);
            let metals: Vec<&str> = text
                .lines()
                .filter_map(|l| l.strip_prefix("- Metal: "))
                .collect();
            let expected: Vec<String> = (0..n).map(|i| format!("metal-{i}")).collect();
            assert_eq!(metals, expected);
            assert_eq!(text.matches("- Water Usage: N/A L/ton").count(), n);
        }
    }

    #[test]
    fn test_extractions_null_renders_header_only() {
        let doc = ProjectDocument::new(json!({"extractions": null}));
        let text = compile("bg", &doc);
        assert!(text.as_str().ends_with(EXTRACTION_HEADER));
    }

    #[test]
    fn test_compile_is_deterministic() {
        let doc = full_document();
        let first = compile("Background.", &doc);
        let second = compile("Background.", &doc);
        assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
    }
}
