use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};

/// Patient portal tabs, blog and event calendar filtering

pub const ALL_CATEGORIES: &str = "all";

pub const ADD_TIMELINE_EVENT_NOTICE: &str = "Yeni olay ekleme formu açılacak.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalTab {
    #[default]
    Appointments,
    Results,
    Prescriptions,
    Messages,
}

impl PortalTab {
    pub const ALL: [PortalTab; 4] = [
        PortalTab::Appointments,
        PortalTab::Results,
        PortalTab::Prescriptions,
        PortalTab::Messages,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PortalTab::Appointments => "appointments",
            PortalTab::Results => "results",
            PortalTab::Prescriptions => "prescriptions",
            PortalTab::Messages => "messages",
        }
    }

    pub fn parse(key: &str) -> PortalResult<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.key() == key)
            .ok_or_else(|| PortalError::UnknownTab(key.to_string()))
    }
}

/// Active flag per tab, exactly one set
pub fn tab_states(active: PortalTab) -> Vec<(PortalTab, bool)> {
    PortalTab::ALL.into_iter().map(|tab| (tab, tab == active)).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    List,
}

/// Month arrows above the event calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStep {
    Previous,
    Next,
}

impl MonthStep {
    /// Offset from the current month after taking this step
    pub fn apply(&self, offset: i32) -> i32 {
        match self {
            MonthStep::Previous => offset.saturating_sub(1),
            MonthStep::Next => offset.saturating_add(1),
        }
    }

    pub fn notice(&self) -> &'static str {
        match self {
            MonthStep::Previous => "Önceki ay gösteriliyor...",
            MonthStep::Next => "Sonraki ay gösteriliyor...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCard {
    pub title: String,
    pub category: String,
    pub date: String,
}

fn category_matches(filter: &str, category: &str) -> bool {
    filter == ALL_CATEGORIES || filter == category
}

pub fn filter_posts_by_category<'a>(posts: &'a [BlogPost], category: &str) -> Vec<&'a BlogPost> {
    posts.iter().filter(|p| category_matches(category, &p.category)).collect()
}

/// Case-insensitive match on title or excerpt. An empty term keeps everything.
pub fn search_posts<'a>(posts: &'a [BlogPost], term: &str) -> Vec<&'a BlogPost> {
    let term = term.to_lowercase();
    posts
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&term) || p.excerpt.to_lowercase().contains(&term))
        .collect()
}

/// Category first, then the search term, as the blog page applies them
pub fn filter_posts(posts: &[BlogPost], category: &str, term: &str) -> Vec<BlogPost> {
    let by_category: Vec<BlogPost> = filter_posts_by_category(posts, category).into_iter().cloned().collect();
    search_posts(&by_category, term).into_iter().cloned().collect()
}

pub fn filter_events_by_category<'a>(events: &'a [EventCard], category: &str) -> Vec<&'a EventCard> {
    events.iter().filter(|e| category_matches(category, &e.category)).collect()
}

pub fn event_registration_notice(title: Option<&str>) -> String {
    let title = title.map(str::trim).filter(|t| !t.is_empty()).unwrap_or("Etkinlik");
    format!("{} etkinliği için kayıt işlemi başlatılıyor...", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts() -> Vec<BlogPost> {
        vec![
            BlogPost {
                title: "Kalp Sağlığı İçin 10 İpucu".into(),
                excerpt: "Düzenli egzersiz ve dengeli beslenme".into(),
                category: "cardiology".into(),
            },
            BlogPost {
                title: "Migren ile Yaşamak".into(),
                excerpt: "Baş ağrısını tetikleyen faktörler".into(),
                category: "neurology".into(),
            },
        ]
    }

    #[test]
    fn exactly_one_tab_is_active() {
        let states = tab_states(PortalTab::parse("results").unwrap());
        assert_eq!(states.iter().filter(|(_, active)| *active).count(), 1);
        assert!(states.contains(&(PortalTab::Results, true)));
    }

    #[test]
    fn unknown_tab_is_rejected() {
        assert_eq!(PortalTab::parse("billing"), Err(PortalError::UnknownTab("billing".into())));
    }

    #[test]
    fn category_filter() {
        let posts = posts();
        assert_eq!(filter_posts_by_category(&posts, ALL_CATEGORIES).len(), 2);
        let neuro = filter_posts_by_category(&posts, "neurology");
        assert_eq!(neuro.len(), 1);
        assert_eq!(neuro[0].title, "Migren ile Yaşamak");
        assert!(filter_posts_by_category(&posts, "dermatology").is_empty());
    }

    #[test]
    fn search_checks_title_and_excerpt() {
        let posts = posts();
        assert_eq!(search_posts(&posts, "KALP").len(), 1);
        assert_eq!(search_posts(&posts, "egzersiz").len(), 1);
        assert_eq!(search_posts(&posts, "migren").len(), 1);
        assert_eq!(search_posts(&posts, "").len(), 2);
    }

    #[test]
    fn combined_filter_narrows_category_then_term() {
        let mut posts = posts();
        posts.push(BlogPost {
            title: "Kalp Krizi Belirtileri".into(),
            excerpt: "Göğüs ağrısı ciddiye alınmalı".into(),
            category: "cardiology".into(),
        });

        let hits = filter_posts(&posts, "cardiology", "belirti");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Kalp Krizi Belirtileri");

        assert_eq!(filter_posts(&posts, "cardiology", "").len(), 2);
        assert_eq!(filter_posts(&posts, ALL_CATEGORIES, "BAŞ").len(), 1);
        assert!(filter_posts(&posts, "neurology", "kalp").is_empty());
    }

    #[test]
    fn month_steps_move_the_offset() {
        let offset = MonthStep::Next.apply(0);
        assert_eq!(offset, 1);
        assert_eq!(MonthStep::Previous.apply(MonthStep::Previous.apply(offset)), -1);
        assert_eq!(MonthStep::Previous.notice(), "Önceki ay gösteriliyor...");
        assert_eq!(MonthStep::Next.notice(), "Sonraki ay gösteriliyor...");
    }

    #[test]
    fn events_filter_and_registration() {
        let events = vec![
            EventCard { title: "Diyabet Semineri".into(), category: "seminar".into(), date: "2026-11-02".into() },
            EventCard { title: "Kan Bağışı".into(), category: "campaign".into(), date: "2026-11-09".into() },
        ];
        assert_eq!(filter_events_by_category(&events, "campaign").len(), 1);
        assert_eq!(filter_events_by_category(&events, ALL_CATEGORIES).len(), 2);
        assert_eq!(
            event_registration_notice(Some("Diyabet Semineri")),
            "Diyabet Semineri etkinliği için kayıt işlemi başlatılıyor..."
        );
        assert_eq!(
            event_registration_notice(None),
            "Etkinlik etkinliği için kayıt işlemi başlatılıyor..."
        );
    }
}
