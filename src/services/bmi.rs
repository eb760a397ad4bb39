use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};

/// BMI Calculator
/// Category, ideal weight range and lifestyle advice from height, weight, age and gender

pub const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 250.0);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 300.0);

const IDEAL_BMI_MIN: f64 = 18.5;
const IDEAL_BMI_MAX: f64 = 24.9;

pub const REPORT_FILE_NAME: &str = "bmi_raporu.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Raw form values. Empty fields arrive as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BmiInput {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Zayıf",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Fazla Kilolu",
            BmiCategory::Obese => "Obez",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "#3498db",
            BmiCategory::Normal => "#28a745",
            BmiCategory::Overweight => "#ffc107",
            BmiCategory::Obese => "#dc3545",
        }
    }

    pub fn health_status(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Yetersiz beslenme riski",
            BmiCategory::Normal => "Sağlıklı kilo aralığında",
            BmiCategory::Overweight => "Sağlık riskleri artabilir",
            BmiCategory::Obese => "Ciddi sağlık riskleri",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub icon: &'static str,
    pub text: &'static str,
}

const fn rec(icon: &'static str, text: &'static str) -> Recommendation {
    Recommendation { icon, text }
}

const UNDERWEIGHT_ADVICE: [Recommendation; 4] = [
    rec("fas fa-utensils", "Kalori alımınızı artırın, sağlıklı yağlar ve proteinler tüketin"),
    rec("fas fa-dumbbell", "Kas kütlesi artırmak için direnç egzersizleri yapın"),
    rec("fas fa-user-md", "Beslenme uzmanından profesyonel destek alın"),
    rec("fas fa-clock", "Düzenli öğün saatleri oluşturun, ara öğünleri ihmal etmeyin"),
];

const NORMAL_ADVICE: [Recommendation; 4] = [
    rec("fas fa-check-circle", "Mevcut kiloyu korumak için dengeli beslenmeye devam edin"),
    rec("fas fa-running", "Haftada en az 150 dakika orta şiddette egzersiz yapın"),
    rec("fas fa-apple-alt", "Bol meyve ve sebze tüketin, işlenmiş gıdalardan kaçının"),
    rec("fas fa-tint", "Günde en az 8 bardak su için"),
];

const OVERWEIGHT_ADVICE: [Recommendation; 4] = [
    rec("fas fa-chart-line", "Haftada 0.5-1 kg kilo vermek için kalori açığı oluşturun"),
    rec("fas fa-walking", "Günlük yürüyüş sürenizi artırın, merdiven kullanın"),
    rec("fas fa-ban", "Şekerli içecekler ve atıştırmalıklardan kaçının"),
    rec("fas fa-calendar-check", "Düzenli kilo takibi yapın ve hedefler belirleyin"),
];

const OBESE_ADVICE: [Recommendation; 4] = [
    rec("fas fa-user-md", "Mutlaka bir doktor ve diyetisyenle görüşün"),
    rec("fas fa-heart", "Kalp sağlığınızı kontrol ettirin, kan tahlilleri yaptırın"),
    rec("fas fa-weight", "Kademeli kilo verme programı başlatın"),
    rec("fas fa-users", "Aile desteği alın, grup aktivitelerine katılın"),
];

const BONE_HEALTH_ADVICE: Recommendation =
    rec("fas fa-bone", "Kemik sağlığı için kalsiyum ve D vitamini alımına dikkat edin");

const IRON_ADVICE: Recommendation =
    rec("fas fa-leaf", "Demir eksikliği için yeşil yapraklı sebzeler ve kırmızı et tüketin");

/// Validated measurement, ready for calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age: u32,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    pub measurement: Measurement,
    pub bmi: f64,
    pub category: BmiCategory,
    pub category_label: String,
    pub category_color: String,
    pub ideal_weight_min: f64,
    pub ideal_weight_max: f64,
    pub weight_change: String,
    pub health_status: String,
    pub gauge_position: f64, // percent, 0-100
    pub recommendations: Vec<Recommendation>,
}

impl BmiResult {
    pub fn display_bmi(&self) -> String {
        format!("{:.1}", self.bmi)
    }

    pub fn ideal_range_text(&self) -> String {
        format!("{:.1} - {:.1} kg", self.ideal_weight_min, self.ideal_weight_max)
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

/// Check the form. Empty fields are reported before range problems.
pub fn validate(input: &BmiInput) -> PortalResult<Measurement> {
    let (Some(height_cm), Some(weight_kg), Some(age), Some(gender)) = (
        present(input.height_cm),
        present(input.weight_kg),
        input.age.filter(|a| *a > 0),
        input.gender,
    ) else {
        return Err(PortalError::MissingBmiFields);
    };

    if !(HEIGHT_RANGE_CM.0..=HEIGHT_RANGE_CM.1).contains(&height_cm) {
        return Err(PortalError::HeightOutOfRange);
    }
    if !(WEIGHT_RANGE_KG.0..=WEIGHT_RANGE_KG.1).contains(&weight_kg) {
        return Err(PortalError::WeightOutOfRange);
    }

    Ok(Measurement { height_cm, weight_kg, age, gender })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn bmi_value(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Pointer position on the four-band gauge, in percent
pub fn gauge_position(bmi: f64) -> f64 {
    let position = if bmi < 18.5 {
        (bmi / 18.5) * 25.0
    } else if bmi < 25.0 {
        25.0 + ((bmi - 18.5) / (25.0 - 18.5)) * 25.0
    } else if bmi < 30.0 {
        50.0 + ((bmi - 25.0) / (30.0 - 25.0)) * 25.0
    } else {
        // Obese band saturates at BMI 40
        75.0 + (((bmi - 30.0) / 10.0) * 25.0).min(25.0)
    };
    position.min(100.0)
}

pub fn recommendations(category: BmiCategory, age: u32, gender: Gender) -> Vec<Recommendation> {
    let mut list = match category {
        BmiCategory::Underweight => UNDERWEIGHT_ADVICE.to_vec(),
        BmiCategory::Normal => NORMAL_ADVICE.to_vec(),
        BmiCategory::Overweight => OVERWEIGHT_ADVICE.to_vec(),
        BmiCategory::Obese => OBESE_ADVICE.to_vec(),
    };

    if age > 50 {
        list.push(BONE_HEALTH_ADVICE);
    }
    if gender == Gender::Female && (18..=45).contains(&age) {
        list.push(IRON_ADVICE);
    }

    list
}

/// Calculate BMI and derived advice for a validated measurement
pub fn calculate(m: Measurement) -> BmiResult {
    let bmi = bmi_value(m.height_cm, m.weight_kg);
    let category = BmiCategory::from_bmi(bmi);

    let height_sq = (m.height_cm / 100.0).powi(2);
    let ideal_weight_min = round1(IDEAL_BMI_MIN * height_sq);
    let ideal_weight_max = round1(IDEAL_BMI_MAX * height_sq);

    let weight_change = if bmi < 18.5 {
        format!("{:.1} kg almalısınız", ideal_weight_min - m.weight_kg)
    } else if bmi > 25.0 {
        format!("{:.1} kg vermelisiniz", m.weight_kg - ideal_weight_max)
    } else {
        "İdeal kilonuzdasınız".to_string()
    };

    BmiResult {
        measurement: m,
        bmi,
        category,
        category_label: category.label().to_string(),
        category_color: category.color().to_string(),
        ideal_weight_min,
        ideal_weight_max,
        weight_change,
        health_status: category.health_status().to_string(),
        gauge_position: gauge_position(bmi),
        recommendations: recommendations(category, m.age, m.gender),
    }
}

/// Validate and calculate in one step
pub fn evaluate(input: &BmiInput) -> PortalResult<BmiResult> {
    validate(input).map(calculate)
}

/// Plain-text report offered for download
pub fn render_report(result: &BmiResult, created_on: NaiveDate, hospital_name: &str) -> String {
    format!(
        "BMI RAPORU\n\
         ==========\n\
         \n\
         BMI Değeri: {}\n\
         Kategori: {}\n\
         İdeal Kilo Aralığı: {}\n\
         Önerilen Değişim: {}\n\
         Sağlık Durumu: {}\n\
         \n\
         Bu rapor {} tarihinde oluşturulmuştur.\n\
         {} - Sağlık Modülleri\n",
        result.display_bmi(),
        result.category_label,
        result.ideal_range_text(),
        result.weight_change,
        result.health_status,
        created_on.format("%d.%m.%Y"),
        hospital_name,
    )
}

/// Write the report into `dir`, returning the file path
pub fn export_report(
    result: &BmiResult,
    dir: &Path,
    created_on: NaiveDate,
    hospital_name: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report dir {}", dir.display()))?;
    let path = dir.join(REPORT_FILE_NAME);
    std::fs::write(&path, render_report(result, created_on, hospital_name))
        .with_context(|| format!("Failed to write BMI report to {}", path.display()))?;
    log::info!("BMI report written to {:?}", path);
    Ok(path)
}

pub fn share_text(result: &BmiResult) -> String {
    format!("BMI değerim: {} - {}", result.display_bmi(), result.category_label)
}
