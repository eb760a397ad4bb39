use thiserror::Error;

/// User-facing failures. Every variant renders as the notice shown on the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortalError {
    #[error("Lütfen tüm alanları doldurun ve cinsiyet seçin.")]
    MissingBmiFields,
    #[error("Lütfen geçerli bir boy değeri girin (100-250 cm).")]
    HeightOutOfRange,
    #[error("Lütfen geçerli bir kilo değeri girin (30-300 kg).")]
    WeightOutOfRange,
    #[error("Önce BMI hesaplaması yapın.")]
    NoBmiResult,

    #[error("Lütfen rahatsızlık yaşadığınız bölgeyi seçin.")]
    BodyPartRequired,
    #[error("Lütfen şikayetinizin süresini seçin.")]
    DurationRequired,
    #[error("Ağrı seviyesi 1 ile 10 arasında olmalıdır.")]
    PainLevelOutOfRange,

    #[error("Lütfen bir branş seçin.")]
    DepartmentRequired,
    #[error("Lütfen bir doktor seçin.")]
    DoctorRequired,
    #[error("Lütfen tarih ve saat seçin.")]
    DateTimeRequired,
    #[error("Randevu tarihi en erken yarın olabilir.")]
    DateTooEarly,
    #[error("Seçilen doktor bu branşta bulunmuyor.")]
    UnknownDoctor,
    #[error("Seçilen saat geçerli bir randevu saati değil.")]
    UnknownTimeSlot,

    #[error("Lütfen tüm zorunlu alanları doldurun.")]
    RequiredFieldsMissing(Vec<String>),
    #[error("Lütfen geçerli bir e-posta adresi girin.")]
    InvalidEmail,

    #[error("Bilinmeyen sekme: {0}")]
    UnknownTab(String),
    #[error("Bilinmeyen kayıt: {0}")]
    UnknownEntry(String),
}

pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_the_page_notices() {
        assert_eq!(
            PortalError::HeightOutOfRange.to_string(),
            "Lütfen geçerli bir boy değeri girin (100-250 cm)."
        );
        assert_eq!(
            PortalError::RequiredFieldsMissing(vec!["name".into()]).to_string(),
            "Lütfen tüm zorunlu alanları doldurun."
        );
    }
}
