//! Built-in sector templates
//!
//! The base template carries the ~20 essential fields every project needs;
//! sector templates extend that set with the parameters that drive design
//! decisions in their industry. All parameter ids here must exist in the
//! built-in library; `registry_matches_library` in the builder tests keeps
//! the two from drifting apart.

use crate::{SectionSpec, SheetTemplate};

fn section(id: &str, title: &str, parameter_ids: &[&str]) -> SectionSpec {
    SectionSpec {
        id: id.into(),
        title: title.into(),
        description: None,
        parameter_ids: parameter_ids.iter().map(|s| s.to_string()).collect(),
        allow_custom_fields: false,
    }
}

fn custom_section(id: &str, title: &str, parameter_ids: &[&str]) -> SectionSpec {
    SectionSpec {
        allow_custom_fields: true,
        ..section(id, title, parameter_ids)
    }
}

/// The guaranteed fallback: essential fields only, any sector
pub(crate) fn base_template() -> SheetTemplate {
    SheetTemplate {
        id: "base".into(),
        name: "Base Technical Sheet".into(),
        description: Some("Essential parameters for any water-treatment project".into()),
        sector: None,
        subsector: None,
        sections: vec![
            section(
                "general",
                "Project Data",
                &[
                    "project_name",
                    "project_location",
                    "sector",
                    "water_source",
                    "treatment_objective",
                    "discharge_point",
                ],
            ),
            section(
                "flows",
                "Flow Data",
                &["flow_daily", "operating_hours", "peak_factor", "operating_days"],
            ),
            section(
                "influent_quality",
                "Influent Quality",
                &[
                    "bod_influent",
                    "cod_influent",
                    "tss_influent",
                    "ph_influent",
                    "oil_grease_influent",
                    "temperature_influent",
                ],
            ),
            section(
                "effluent_targets",
                "Effluent Targets",
                &[
                    "bod_effluent",
                    "cod_effluent",
                    "tss_effluent",
                    "discharge_standard",
                ],
            ),
        ],
    }
}

/// Sector templates in registration (priority) order
pub(crate) fn sector_templates() -> Vec<SheetTemplate> {
    vec![
        municipal(),
        industrial_generic(),
        industrial_food_beverage(),
        industrial_oil_gas(),
        industrial_textile(),
        commercial(),
    ]
}

fn municipal() -> SheetTemplate {
    let mut template = base_template();
    template.id = "municipal".into();
    template.name = "Municipal Wastewater".into();
    template.description = Some("Domestic sewage treatment for towns and municipalities".into());
    template.sector = Some("municipal".into());

    if let Some(influent) = section_mut(&mut template, "influent_quality") {
        influent.parameter_ids.extend([
            "total_nitrogen_influent".to_string(),
            "total_phosphorus_influent".to_string(),
            "fecal_coliforms_influent".to_string(),
        ]);
    }
    if let Some(effluent) = section_mut(&mut template, "effluent_targets") {
        effluent.parameter_ids.extend([
            "total_nitrogen_effluent".to_string(),
            "fecal_coliforms_effluent".to_string(),
        ]);
    }
    template.sections.push(section(
        "site",
        "Site Conditions",
        &[
            "available_area",
            "site_altitude",
            "soil_type",
            "distance_to_discharge",
            "noise_restrictions",
            "odor_restrictions",
        ],
    ));
    template.sections.push(section(
        "operations",
        "Operations",
        &["labor_availability", "automation_level", "sludge_disposal", "energy_cost"],
    ));
    template
}

fn industrial_base(id: &str, name: &str, subsector: Option<&str>) -> SheetTemplate {
    let mut template = base_template();
    template.id = id.into();
    template.name = name.into();
    template.sector = Some("industrial".into());
    template.subsector = subsector.map(|s| s.to_string());

    template.sections.insert(
        1,
        custom_section(
            "industry",
            "Industrial Profile",
            &[
                "industry_type",
                "production_capacity",
                "wastewater_variability",
                "hazardous_streams",
            ],
        ),
    );
    if let Some(influent) = section_mut(&mut template, "influent_quality") {
        influent
            .parameter_ids
            .extend(["tds_influent".to_string(), "conductivity_influent".to_string()]);
    }
    template.sections.push(section(
        "site",
        "Site Conditions",
        &["available_area", "power_available", "supply_voltage"],
    ));
    template
}

fn industrial_generic() -> SheetTemplate {
    let mut template = industrial_base("industrial_generic", "Industrial Wastewater", None);
    template.description = Some("Generic industrial effluent treatment".into());
    template
}

fn industrial_food_beverage() -> SheetTemplate {
    let mut template = industrial_base(
        "industrial_food_beverage",
        "Food & Beverage Wastewater",
        Some("food_beverage"),
    );
    template.description =
        Some("High-organic-load effluent with CIP chemistry swings".into());
    if let Some(industry) = section_mut(&mut template, "industry") {
        industry.parameter_ids.push("cip_frequency".to_string());
    }
    if let Some(influent) = section_mut(&mut template, "influent_quality") {
        influent.parameter_ids.push("alkalinity_influent".to_string());
    }
    template
}

fn industrial_oil_gas() -> SheetTemplate {
    let mut template =
        industrial_base("industrial_oil_gas", "Oil & Gas Produced Water", Some("oil_gas"));
    template.description = Some("Produced and process water with hydrocarbons and brine".into());
    if let Some(influent) = section_mut(&mut template, "influent_quality") {
        influent
            .parameter_ids
            .extend(["hardness_influent".to_string(), "turbidity_influent".to_string()]);
    }
    if let Some(effluent) = section_mut(&mut template, "effluent_targets") {
        effluent.parameter_ids.push("oil_grease_effluent".to_string());
    }
    template
}

fn industrial_textile() -> SheetTemplate {
    let mut template =
        industrial_base("industrial_textile", "Textile Wastewater", Some("textile"));
    template.description = Some("Dye-house effluent with color and temperature load".into());
    if let Some(influent) = section_mut(&mut template, "influent_quality") {
        influent.parameter_ids.push("color_influent".to_string());
    }
    if let Some(effluent) = section_mut(&mut template, "effluent_targets") {
        effluent.parameter_ids.push("turbidity_effluent".to_string());
    }
    template
}

fn commercial() -> SheetTemplate {
    let mut template = base_template();
    template.id = "commercial".into();
    template.name = "Commercial Wastewater".into();
    template.description =
        Some("Hotels, malls and office complexes; mostly domestic-strength water".into());
    template.sector = Some("commercial".into());
    template.sections.push(section(
        "operations",
        "Operations",
        &["labor_availability", "automation_level", "water_cost"],
    ));
    template
}

fn section_mut<'a>(template: &'a mut SheetTemplate, id: &str) -> Option<&'a mut SectionSpec> {
    template.sections.iter_mut().find(|s| s.id == id)
}
