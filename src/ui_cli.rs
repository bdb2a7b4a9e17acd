use std::fs;
use std::io::{self, Write};

use crate::app::AppError;
use crate::assessment::{self, InspectionRecord};
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::material_db;
use crate::report;
use crate::units::{length, pressure, LengthUnit, PressureUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Assessment,
    Materials,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ASSESSMENT));
    println!("{}", tr.t(keys::MAIN_MENU_MATERIALS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Assessment),
            "2" => return Ok(MenuChoice::Materials),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// Level-1 평가 메뉴를 처리한다. 레코드를 입력받아 평가하고 보고서를 출력한다.
pub fn handle_assessment(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ASSESSMENT_HEADING));

    let location = read_line(tr.t(keys::PROMPT_LOCATION))?.trim().to_string();
    let material = read_line(tr.t(keys::PROMPT_MATERIAL))?.trim().to_string();

    let p_value = read_f64(tr, tr.t(keys::PROMPT_DESIGN_PRESSURE))?;
    let p_unit = read_pressure_unit(tr, cfg.default_units.pressure)?;
    let design_pressure_mpa = pressure::to_mpa(p_value, p_unit);

    let od_value = read_f64(tr, tr.t(keys::PROMPT_OUTSIDE_DIAMETER))?;
    let od_unit = read_length_unit(tr, cfg.default_units.length)?;
    let outside_diameter_mm = length::convert_length(od_value, od_unit, LengthUnit::Millimeter);

    let nominal_thickness_mm = read_f64(tr, tr.t(keys::PROMPT_NOMINAL_THICKNESS))?;

    let allowable_stress_mpa = read_allowable_stress(tr, &material)?;

    let reference_thickness_mm = read_f64(tr, tr.t(keys::PROMPT_REFERENCE_THICKNESS))?;
    let min_measured_thickness_mm = read_f64(tr, tr.t(keys::PROMPT_MIN_MEASURED_THICKNESS))?;
    let longitudinal_extent_mm = read_f64(tr, tr.t(keys::PROMPT_LONGITUDINAL_EXTENT))?;
    let circumferential_extent_mm = read_f64(tr, tr.t(keys::PROMPT_CIRCUMFERENTIAL_EXTENT))?;
    let future_corrosion_allowance_mm = read_f64(tr, tr.t(keys::PROMPT_FCA))?;
    let weld_joint_efficiency = read_f64(tr, tr.t(keys::PROMPT_WELD_EFFICIENCY))?;
    let mechanical_allowance_mm = read_f64(tr, tr.t(keys::PROMPT_MECHANICAL_ALLOWANCE))?;

    if let Some(y) = material_db::y_coefficient(&material) {
        println!("{} {y}", tr.t(keys::MATERIAL_Y));
    }
    let y_coefficient = read_f64(tr, tr.t(keys::PROMPT_Y_COEFFICIENT))?;
    let allowable_rsf = read_f64(tr, tr.t(keys::PROMPT_ALLOWABLE_RSF))?;
    let operating_years = read_f64(tr, tr.t(keys::PROMPT_OPERATING_YEARS))?;

    let record = InspectionRecord {
        location,
        material,
        design_pressure_mpa,
        outside_diameter_mm,
        nominal_thickness_mm,
        allowable_stress_mpa,
        reference_thickness_mm,
        min_measured_thickness_mm,
        longitudinal_extent_mm,
        circumferential_extent_mm,
        future_corrosion_allowance_mm,
        weld_joint_efficiency,
        mechanical_allowance_mm,
        y_coefficient,
        allowable_rsf,
        operating_years,
    };

    let result = assessment::assess(&record)?;
    println!("{}", report::render(&record, &result, tr));

    let save_path = read_line(tr.t(keys::PROMPT_SAVE_RECORD))?;
    let save_path = save_path.trim();
    if !save_path.is_empty() {
        let content = toml::to_string_pretty(&record).map_err(AppError::Serialize)?;
        fs::write(save_path, content)?;
        println!("{} {save_path}", tr.t(keys::RECORD_SAVED));
    }
    Ok(())
}

/// 허용 응력을 입력받는다. 0 입력 시 재질 DB에서 온도 기준으로 조회한다.
fn read_allowable_stress(tr: &Translator, material: &str) -> Result<f64, AppError> {
    loop {
        let s = read_f64(tr, tr.t(keys::PROMPT_ALLOWABLE_STRESS))?;
        if s > 0.0 {
            return Ok(s);
        }
        if material_db::find_material(material).is_none() {
            println!("{}", tr.t(keys::DB_MATERIAL_MISSING));
            continue;
        }
        let temp_c = read_f64(tr, tr.t(keys::PROMPT_DB_TEMPERATURE))?;
        if let Some(value) = material_db::allowable_stress(material, temp_c) {
            println!(
                "{} {:.2} MPa {}",
                tr.t(keys::DB_STRESS_APPLIED),
                value.value_mpa,
                if value.clamped {
                    tr.t(keys::MATERIAL_CLAMPED_NOTE)
                } else {
                    ""
                }
            );
            return Ok(value.value_mpa);
        }
    }
}

/// 재질 조회 메뉴를 처리한다.
pub fn handle_materials(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MATERIALS_HEADING));
    for mat in material_db::materials() {
        println!("  {} ({})", mat.name, mat.code);
    }
    let code = read_line(tr.t(keys::PROMPT_MATERIAL_CODE))?;
    let code = code.trim();
    let Some(mat) = material_db::find_material(code) else {
        println!("{}", tr.t(keys::MATERIAL_NOT_FOUND));
        return Ok(());
    };
    println!("{} ({}) - {}", mat.name, mat.code, mat.notes);
    println!("{} {}", tr.t(keys::MATERIAL_Y), mat.y_coefficient);
    let temp_c = read_f64(tr, tr.t(keys::PROMPT_DB_TEMPERATURE))?;
    if let Some(value) = material_db::allowable_stress(code, temp_c) {
        println!(
            "{} {:.2} MPa {}",
            tr.t(keys::MATERIAL_ALLOWABLE),
            value.value_mpa,
            if value.clamped {
                tr.t(keys::MATERIAL_CLAMPED_NOTE)
            } else {
                ""
            }
        );
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language.as_deref().unwrap_or(tr.language_code())
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let lang = match sel.trim() {
        "1" => "ko",
        "2" => "en",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.language = Some(lang.to_string());
    println!("{} {lang}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_pressure_unit(tr: &Translator, default: PressureUnit) -> Result<PressureUnit, AppError> {
    println!("{}", tr.t(keys::PRESSURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    let unit = match sel.trim() {
        "1" => PressureUnit::MegaPascal,
        "2" => PressureUnit::KiloPascal,
        "3" => PressureUnit::Bar,
        "4" => PressureUnit::KgPerCm2,
        "5" => PressureUnit::Psi,
        _ => default,
    };
    Ok(unit)
}

fn read_length_unit(tr: &Translator, default: LengthUnit) -> Result<LengthUnit, AppError> {
    println!("{}", tr.t(keys::LENGTH_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    let unit = match sel.trim() {
        "1" => LengthUnit::Millimeter,
        "2" => LengthUnit::Centimeter,
        "3" => LengthUnit::Meter,
        "4" => LengthUnit::Inch,
        _ => default,
    };
    Ok(unit)
}
