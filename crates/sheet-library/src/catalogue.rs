//! Built-in water-treatment parameter catalogue
//!
//! Every parameter a technical sheet can reference, grouped the way the
//! dashboard presents them. Ids are stable: persisted documents reference
//! them forever, so entries may be added but never renamed or removed.

use sheet_model::{FieldType, Importance, ValidationRule};

use crate::{ParameterDefinition, ParameterLibrary};

pub(crate) fn register_builtins(library: &mut ParameterLibrary) {
    register_identification(library);
    register_flows(library);
    register_influent_quality(library);
    register_effluent_targets(library);
    register_site_constraints(library);
    register_energy_operations(library);
    register_industrial(library);
}

// =========================================================================
// Project identification
// =========================================================================

fn register_identification(library: &mut ParameterLibrary) {
    library.register(ParameterDefinition {
        id: "project_name".into(),
        label: "Project Name".into(),
        field_type: FieldType::Text,
        required: true,
        importance: Importance::Critical,
        validation: Some(ValidationRule::NonEmpty),
        validation_message: Some("Project name is required".into()),
        placeholder: Some("WWTP Los Altos industrial park".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "project_location".into(),
        label: "Location".into(),
        field_type: FieldType::Text,
        importance: Importance::Important,
        placeholder: Some("City, state, country".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "sector".into(),
        label: "Sector".into(),
        field_type: FieldType::Select,
        options: vec![
            "municipal".into(),
            "industrial".into(),
            "commercial".into(),
            "residential".into(),
        ],
        required: true,
        importance: Importance::Critical,
        validation: Some(ValidationRule::OneOf(vec![
            "municipal".into(),
            "industrial".into(),
            "commercial".into(),
            "residential".into(),
        ])),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "subsector".into(),
        label: "Subsector".into(),
        field_type: FieldType::Text,
        importance: Importance::Important,
        placeholder: Some("food_beverage, oil_gas, textile, ...".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "water_source".into(),
        label: "Water Source".into(),
        field_type: FieldType::Select,
        options: vec![
            "municipal_network".into(),
            "well".into(),
            "river".into(),
            "sea".into(),
            "treated_reuse".into(),
        ],
        importance: Importance::Important,
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "treatment_objective".into(),
        label: "Treatment Objective".into(),
        field_type: FieldType::MultiSelect,
        options: vec![
            "discharge_compliance".into(),
            "reuse_irrigation".into(),
            "process_reuse".into(),
            "potable".into(),
            "zero_liquid_discharge".into(),
        ],
        required: true,
        importance: Importance::Critical,
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "discharge_point".into(),
        label: "Discharge Point".into(),
        field_type: FieldType::Select,
        options: vec![
            "municipal_sewer".into(),
            "surface_water".into(),
            "sea_outfall".into(),
            "soil_infiltration".into(),
            "no_discharge".into(),
        ],
        importance: Importance::Important,
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "project_stage".into(),
        label: "Project Stage".into(),
        field_type: FieldType::Select,
        options: vec![
            "feasibility".into(),
            "basic_engineering".into(),
            "detail_engineering".into(),
            "construction".into(),
            "operation".into(),
        ],
        ..Default::default()
    });
}

// =========================================================================
// Flows
// =========================================================================

fn register_flows(library: &mut ParameterLibrary) {
    library.register(ParameterDefinition {
        id: "flow_daily".into(),
        label: "Average Daily Flow".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("m3/d".into()),
        available_units: vec!["m3/d".into(), "L/s".into(), "gpm".into()],
        required: true,
        importance: Importance::Critical,
        validation: Some(ValidationRule::Positive),
        validation_message: Some("Daily flow must be greater than zero".into()),
        description: Some("Design average flow over a 24 h day".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "operating_hours".into(),
        label: "Operating Hours".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("h/d".into()),
        available_units: vec!["h/d".into()],
        required: true,
        importance: Importance::Important,
        validation: Some(ValidationRule::Range {
            min: Some(1.0),
            max: Some(24.0),
        }),
        validation_message: Some("Operating hours must be between 1 and 24".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "operating_days".into(),
        label: "Operating Days per Week".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("d/week".into()),
        available_units: vec!["d/week".into()],
        validation: Some(ValidationRule::Range {
            min: Some(1.0),
            max: Some(7.0),
        }),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "peak_factor".into(),
        label: "Peak Factor".into(),
        field_type: FieldType::Number,
        importance: Importance::Important,
        validation: Some(ValidationRule::Range {
            min: Some(1.0),
            max: Some(5.0),
        }),
        description: Some("Ratio of peak hourly flow to average hourly flow".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "flow_average".into(),
        label: "Average Hourly Flow".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("m3/h".into()),
        available_units: vec!["m3/h".into(), "L/s".into()],
        description: Some("Derived: daily flow over operating hours".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "flow_peak".into(),
        label: "Peak Hourly Flow".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("m3/h".into()),
        available_units: vec!["m3/h".into(), "L/s".into()],
        description: Some("Derived: average hourly flow times peak factor".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "volume_monthly".into(),
        label: "Monthly Volume".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("m3/month".into()),
        available_units: vec!["m3/month".into()],
        description: Some("Derived: daily flow times 30".into()),
        ..Default::default()
    });
}

// =========================================================================
// Influent quality
// =========================================================================

fn register_influent_quality(library: &mut ParameterLibrary) {
    let mg_l = |id: &str, label: &str, importance: Importance| ParameterDefinition {
        id: id.into(),
        label: label.into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("mg/L".into()),
        available_units: vec!["mg/L".into(), "ppm".into()],
        importance,
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    };

    library.register(ParameterDefinition {
        required: true,
        description: Some("Biochemical oxygen demand of the raw water".into()),
        ..mg_l("bod_influent", "Influent BOD5", Importance::Critical)
    });

    library.register(ParameterDefinition {
        required: true,
        description: Some("Chemical oxygen demand of the raw water".into()),
        ..mg_l("cod_influent", "Influent COD", Importance::Critical)
    });

    library.register(ParameterDefinition {
        required: true,
        description: Some("Total suspended solids of the raw water".into()),
        ..mg_l("tss_influent", "Influent TSS", Importance::Critical)
    });

    library.register(mg_l("tds_influent", "Influent TDS", Importance::Important));
    library.register(mg_l(
        "oil_grease_influent",
        "Influent Oil & Grease",
        Importance::Important,
    ));
    library.register(mg_l(
        "total_nitrogen_influent",
        "Influent Total Nitrogen",
        Importance::Important,
    ));
    library.register(mg_l(
        "ammonia_influent",
        "Influent Ammonia Nitrogen",
        Importance::Optional,
    ));
    library.register(mg_l(
        "total_phosphorus_influent",
        "Influent Total Phosphorus",
        Importance::Important,
    ));
    library.register(mg_l(
        "alkalinity_influent",
        "Influent Alkalinity",
        Importance::Optional,
    ));

    library.register(ParameterDefinition {
        id: "ph_influent".into(),
        label: "Influent pH".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("pH".into()),
        available_units: vec!["pH".into()],
        required: true,
        importance: Importance::Critical,
        validation: Some(ValidationRule::Range {
            min: Some(0.0),
            max: Some(14.0),
        }),
        validation_message: Some("pH must be between 0 and 14".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "temperature_influent".into(),
        label: "Influent Temperature".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("°C".into()),
        available_units: vec!["°C".into()],
        importance: Importance::Important,
        validation: Some(ValidationRule::Range {
            min: Some(0.0),
            max: Some(80.0),
        }),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "conductivity_influent".into(),
        label: "Influent Conductivity".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("µS/cm".into()),
        available_units: vec!["µS/cm".into(), "mS/cm".into()],
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "hardness_influent".into(),
        label: "Influent Hardness".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("mg/L CaCO3".into()),
        available_units: vec!["mg/L CaCO3".into()],
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "turbidity_influent".into(),
        label: "Influent Turbidity".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("NTU".into()),
        available_units: vec!["NTU".into()],
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "color_influent".into(),
        label: "Influent Color".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("Pt-Co".into()),
        available_units: vec!["Pt-Co".into()],
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "fecal_coliforms_influent".into(),
        label: "Influent Fecal Coliforms".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("MPN/100mL".into()),
        available_units: vec!["MPN/100mL".into()],
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    });
}

// =========================================================================
// Effluent targets
// =========================================================================

fn register_effluent_targets(library: &mut ParameterLibrary) {
    let target = |id: &str, label: &str| ParameterDefinition {
        id: id.into(),
        label: label.into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("mg/L".into()),
        available_units: vec!["mg/L".into(), "ppm".into()],
        importance: Importance::Critical,
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    };

    library.register(ParameterDefinition {
        required: true,
        ..target("bod_effluent", "Target Effluent BOD5")
    });
    library.register(ParameterDefinition {
        required: true,
        ..target("cod_effluent", "Target Effluent COD")
    });
    library.register(ParameterDefinition {
        required: true,
        ..target("tss_effluent", "Target Effluent TSS")
    });
    library.register(target("oil_grease_effluent", "Target Effluent Oil & Grease"));
    library.register(target(
        "total_nitrogen_effluent",
        "Target Effluent Total Nitrogen",
    ));
    library.register(target(
        "total_phosphorus_effluent",
        "Target Effluent Total Phosphorus",
    ));

    library.register(ParameterDefinition {
        id: "ph_effluent".into(),
        label: "Target Effluent pH".into(),
        field_type: FieldType::Text,
        importance: Importance::Important,
        placeholder: Some("6.5 - 8.5".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "turbidity_effluent".into(),
        label: "Target Effluent Turbidity".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("NTU".into()),
        available_units: vec!["NTU".into()],
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "fecal_coliforms_effluent".into(),
        label: "Target Effluent Fecal Coliforms".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("MPN/100mL".into()),
        available_units: vec!["MPN/100mL".into()],
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "discharge_standard".into(),
        label: "Discharge Standard".into(),
        field_type: FieldType::Select,
        options: vec![
            "NOM-001-SEMARNAT".into(),
            "NOM-002-SEMARNAT".into(),
            "NOM-003-SEMARNAT".into(),
            "local_regulation".into(),
            "client_specification".into(),
        ],
        required: true,
        importance: Importance::Critical,
        ..Default::default()
    });
}

// =========================================================================
// Site constraints
// =========================================================================

fn register_site_constraints(library: &mut ParameterLibrary) {
    library.register(ParameterDefinition {
        id: "available_area".into(),
        label: "Available Area".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("m2".into()),
        available_units: vec!["m2".into(), "ha".into()],
        importance: Importance::Important,
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "power_available".into(),
        label: "Available Power".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("kVA".into()),
        available_units: vec!["kVA".into(), "kW".into()],
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "supply_voltage".into(),
        label: "Supply Voltage".into(),
        field_type: FieldType::Select,
        options: vec!["220 V".into(), "440 V".into(), "480 V".into()],
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "site_altitude".into(),
        label: "Site Altitude".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("masl".into()),
        available_units: vec!["masl".into()],
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "distance_to_discharge".into(),
        label: "Distance to Discharge Point".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("m".into()),
        available_units: vec!["m".into(), "km".into()],
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "soil_type".into(),
        label: "Soil Type".into(),
        field_type: FieldType::Select,
        options: vec![
            "rock".into(),
            "clay".into(),
            "sand".into(),
            "fill".into(),
            "unknown".into(),
        ],
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "existing_infrastructure".into(),
        label: "Existing Infrastructure".into(),
        field_type: FieldType::Text,
        multiline: true,
        description: Some("Existing treatment units, piping or civil works to reuse".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "noise_restrictions".into(),
        label: "Noise Restrictions".into(),
        field_type: FieldType::Boolean,
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "odor_restrictions".into(),
        label: "Odor Restrictions".into(),
        field_type: FieldType::Boolean,
        ..Default::default()
    });
}

// =========================================================================
// Energy & operations
// =========================================================================

fn register_energy_operations(library: &mut ParameterLibrary) {
    library.register(ParameterDefinition {
        id: "energy_cost".into(),
        label: "Energy Cost".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("USD/kWh".into()),
        available_units: vec!["USD/kWh".into(), "MXN/kWh".into()],
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "water_cost".into(),
        label: "Water Cost".into(),
        field_type: FieldType::UnitValue,
        default_unit: Some("USD/m3".into()),
        available_units: vec!["USD/m3".into(), "MXN/m3".into()],
        validation: Some(ValidationRule::Positive),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "labor_availability".into(),
        label: "Operating Labor".into(),
        field_type: FieldType::Select,
        options: vec![
            "onsite_operator".into(),
            "part_time_operator".into(),
            "remote_monitoring".into(),
            "none".into(),
        ],
        importance: Importance::Important,
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "automation_level".into(),
        label: "Automation Level".into(),
        field_type: FieldType::Select,
        options: vec![
            "manual".into(),
            "semi_automatic".into(),
            "fully_automatic".into(),
        ],
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "sludge_disposal".into(),
        label: "Sludge Disposal Route".into(),
        field_type: FieldType::Select,
        options: vec![
            "landfill".into(),
            "land_application".into(),
            "third_party".into(),
            "drying_beds".into(),
        ],
        importance: Importance::Important,
        ..Default::default()
    });
}

// =========================================================================
// Industrial
// =========================================================================

fn register_industrial(library: &mut ParameterLibrary) {
    library.register(ParameterDefinition {
        id: "industry_type".into(),
        label: "Industry Type".into(),
        field_type: FieldType::Text,
        importance: Importance::Important,
        placeholder: Some("Dairy, brewery, refinery, dye house, ...".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "production_capacity".into(),
        label: "Production Capacity".into(),
        field_type: FieldType::Text,
        description: Some("Throughput driving the wastewater load, in plant units".into()),
        placeholder: Some("120 t/d of product".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "wastewater_variability".into(),
        label: "Wastewater Variability".into(),
        field_type: FieldType::Select,
        options: vec!["low".into(), "medium".into(), "high".into()],
        importance: Importance::Important,
        description: Some("Load swings between production campaigns".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "cip_frequency".into(),
        label: "CIP Frequency".into(),
        field_type: FieldType::Select,
        options: vec![
            "daily".into(),
            "weekly".into(),
            "per_batch".into(),
            "none".into(),
        ],
        description: Some("Clean-in-place cycles discharging to the plant".into()),
        ..Default::default()
    });

    library.register(ParameterDefinition {
        id: "hazardous_streams".into(),
        label: "Hazardous Side Streams".into(),
        field_type: FieldType::MultiSelect,
        options: vec![
            "solvents".into(),
            "heavy_metals".into(),
            "concentrated_brine".into(),
            "high_temperature".into(),
            "none".into(),
        ],
        ..Default::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_options_match_rule() {
        let library = ParameterLibrary::builtin();
        let sector = library.get("sector").unwrap();
        match &sector.validation {
            Some(ValidationRule::OneOf(allowed)) => assert_eq!(allowed, &sector.options),
            other => panic!("expected OneOf rule, got {other:?}"),
        }
    }

    #[test]
    fn test_unit_parameters_have_default_unit() {
        let library = ParameterLibrary::builtin();
        for id in library.ids() {
            let def = library.get(id).unwrap();
            if def.field_type == FieldType::UnitValue {
                assert!(def.default_unit.is_some(), "{id} lacks a default unit");
                assert!(!def.available_units.is_empty(), "{id} lacks units");
            }
        }
    }
}
