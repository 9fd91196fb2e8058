// ═══════════════════════════════════════════════════════════════════
// Model Tests — NavRecord, NavHistory, Investment, Portfolio, Settings
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use nav_projection_core::errors::CoreError;
use nav_projection_core::models::analytics::RateSource;
use nav_projection_core::models::investment::Investment;
use nav_projection_core::models::nav::{NavHistory, NavRecord};
use nav_projection_core::models::portfolio::Portfolio;
use nav_projection_core::models::settings::Settings;
use nav_projection_core::services::portfolio_service::PortfolioService;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn is_sorted(history: &NavHistory) -> bool {
    history.records().windows(2).all(|w| w[0].date <= w[1].date)
}

// ═══════════════════════════════════════════════════════════════════
//  NavRecord
// ═══════════════════════════════════════════════════════════════════

mod nav_record {
    use super::*;

    #[test]
    fn positive_value_accepted() {
        let r = NavRecord::new(d(2024, 1, 1), 100.5).unwrap();
        assert_eq!(r.date, d(2024, 1, 1));
        assert_eq!(r.value, 100.5);
    }

    #[test]
    fn zero_rejected() {
        assert_eq!(
            NavRecord::new(d(2024, 1, 1), 0.0),
            Err(CoreError::InvalidValue(0.0))
        );
    }

    #[test]
    fn negative_rejected() {
        assert_eq!(
            NavRecord::new(d(2024, 1, 1), -3.0),
            Err(CoreError::InvalidValue(-3.0))
        );
    }

    #[test]
    fn nan_and_infinity_rejected() {
        assert!(NavRecord::new(d(2024, 1, 1), f64::NAN).is_err());
        assert!(NavRecord::new(d(2024, 1, 1), f64::INFINITY).is_err());
    }

    #[test]
    fn serializes_date_as_iso_text() {
        let r = NavRecord::new(d(2024, 7, 1), 5300.0).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"date":"2024-07-01","value":5300.0}"#);
        let back: NavRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  NavHistory
// ═══════════════════════════════════════════════════════════════════

mod nav_history {
    use super::*;

    #[test]
    fn empty_history() {
        let h = NavHistory::new();
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
        assert!(h.latest().is_none());
        assert!(h.first().is_none());
    }

    #[test]
    fn out_of_order_inserts_are_sorted() {
        let mut h = NavHistory::new();
        h.append(d(2026, 1, 15), 6200.0).unwrap();
        h.append(d(2024, 1, 1), 5000.0).unwrap();
        h.append(d(2024, 7, 1), 5300.0).unwrap();
        h.append(d(2025, 3, 10), 5800.0).unwrap();

        assert_eq!(h.len(), 4);
        assert!(is_sorted(&h));
        assert_eq!(h.first().unwrap().date, d(2024, 1, 1));
        assert_eq!(h.latest().unwrap().date, d(2026, 1, 15));
    }

    #[test]
    fn stays_sorted_after_every_insert() {
        let mut h = NavHistory::new();
        let days = [17u32, 3, 28, 3, 9, 1, 22, 14, 28, 5];
        for (i, day) in days.iter().enumerate() {
            h.append(d(2024, 5, *day), 100.0 + i as f64).unwrap();
            assert!(is_sorted(&h), "unsorted after insert #{i}");
        }
        assert_eq!(h.len(), days.len());
    }

    #[test]
    fn equal_dates_keep_insertion_order() {
        let mut h = NavHistory::new();
        h.append(d(2024, 1, 1), 10.0).unwrap();
        h.append(d(2024, 1, 1), 20.0).unwrap();
        h.append(d(2023, 12, 31), 5.0).unwrap();
        h.append(d(2024, 1, 1), 30.0).unwrap();

        let values: Vec<f64> = h.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![5.0, 10.0, 20.0, 30.0]);
        assert_eq!(h.latest().unwrap().value, 30.0);
    }

    #[test]
    fn invalid_value_leaves_history_unchanged() {
        let mut h = NavHistory::new();
        h.append(d(2024, 1, 1), 10.0).unwrap();
        assert_eq!(
            h.append(d(2024, 2, 1), 0.0),
            Err(CoreError::InvalidValue(0.0))
        );
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn serializes_as_plain_list() {
        let mut h = NavHistory::new();
        h.append(d(2024, 1, 1), 1.5).unwrap();
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"[{"date":"2024-01-01","value":1.5}]"#);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Investment
// ═══════════════════════════════════════════════════════════════════

mod investment {
    use super::*;

    #[test]
    fn creation_keeps_identity_fields() {
        let inv = Investment::new("Tech", 5000.0, 8.0, d(2024, 1, 1)).unwrap();
        assert_eq!(inv.name(), "Tech");
        assert_eq!(inv.amount_invested(), 5000.0);
        assert_eq!(inv.reference_rate(), 8.0);
        assert_eq!(inv.investment_date(), d(2024, 1, 1));
        assert!(inv.nav_history().is_empty());
    }

    #[test]
    fn any_positive_amount_accepted() {
        for amount in [0.01, 1.0, 1234.56, 1e12] {
            let inv = Investment::new("X", amount, 5.0, d(2024, 1, 1)).unwrap();
            assert_eq!(inv.amount_invested(), amount);
        }
    }

    #[test]
    fn non_positive_amount_rejected() {
        for amount in [0.0, -1.0, -5000.0] {
            assert_eq!(
                Investment::new("X", amount, 5.0, d(2024, 1, 1)),
                Err(CoreError::InvalidAmount(amount))
            );
        }
        assert!(Investment::new("X", f64::NAN, 5.0, d(2024, 1, 1)).is_err());
    }

    #[test]
    fn negative_and_zero_reference_rates_accepted() {
        for rate in [-100.0, -12.5, 0.0, 3.0, 250.0] {
            assert!(Investment::new("X", 100.0, rate, d(2024, 1, 1)).is_ok());
        }
    }

    #[test]
    fn unusable_reference_rate_rejected() {
        assert_eq!(
            Investment::new("X", 100.0, -150.0, d(2024, 1, 1)),
            Err(CoreError::InvalidRate(-150.0))
        );
        assert!(Investment::new("X", 100.0, f64::INFINITY, d(2024, 1, 1)).is_err());
    }

    #[test]
    fn latest_nav_requires_history() {
        let mut inv = Investment::new("Tech", 100.0, 5.0, d(2024, 1, 1)).unwrap();
        assert_eq!(
            inv.latest_nav(),
            Err(CoreError::EmptyHistory("Tech".into()))
        );
        inv.add_nav(d(2024, 6, 1), 110.0).unwrap();
        inv.add_nav(d(2024, 3, 1), 105.0).unwrap();
        assert_eq!(inv.latest_nav().unwrap().value, 110.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Portfolio & Settings
// ═══════════════════════════════════════════════════════════════════

mod portfolio {
    use super::*;

    #[test]
    fn default_portfolio_is_empty() {
        let p = Portfolio::new();
        assert!(p.is_empty());
        assert_eq!(p.total_invested(), 0.0);
        assert!(p.names().is_empty());
        assert_eq!(p.settings, Settings::default());
    }

    #[test]
    fn names_and_investments_are_sorted() {
        let svc = PortfolioService::new();
        let mut p = Portfolio::new();
        for (name, amount) in [("b", 2.0), ("c", 3.0), ("a", 1.0)] {
            let inv = Investment::new(name, amount, 1.0, d(2024, 1, 1)).unwrap();
            svc.add_investment(&mut p, inv).unwrap();
        }
        assert_eq!(p.names(), vec!["a", "b", "c"]);
        let names: Vec<&str> = p.sorted_investments().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(p.total_invested(), 6.0);
        assert!(p.get("a").is_some());
        assert!(p.get("z").is_none());
    }

    #[test]
    fn entries_are_keyed_by_investment_name() {
        let svc = PortfolioService::new();
        let mut p = Portfolio::with_settings(Settings {
            currency: "USD".into(),
        });
        for name in ["Tech", "Bonds"] {
            let inv = Investment::new(name, 10.0, 1.0, d(2024, 1, 1)).unwrap();
            svc.add_investment(&mut p, inv).unwrap();
        }
        assert!(p.contains("Tech"));
        assert!(!p.contains("tech"));
        for name in p.names() {
            assert_eq!(p.get(name).unwrap().name(), name);
        }
        assert_eq!(p.settings.currency, "USD");
    }

    #[test]
    fn default_settings_use_euro() {
        assert_eq!(Settings::default().currency, "EUR");
    }

    #[test]
    fn rate_source_display() {
        assert_eq!(RateSource::Reference.to_string(), "reference");
        assert_eq!(RateSource::Realized.to_string(), "realized");
    }
}
