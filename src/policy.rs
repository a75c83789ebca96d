//! Manufacturer service policies.
//!
//! One table feeds both the distance baseline (full-service hours) and the
//! manufacturer text shown next to the personalized recommendation.

use crate::{Brand, ProductType};

/// Hours between services, either fixed or a model-dependent range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceHours {
    Fixed(u32),
    Range(u32, u32),
}

impl ServiceHours {
    /// Conservative end of the cadence.
    pub fn lower_bound(self) -> u32 {
        match self {
            ServiceHours::Fixed(h) => h,
            ServiceHours::Range(lo, _) => lo,
        }
    }

    fn display(self) -> String {
        match self {
            ServiceHours::Fixed(h) => format!("{} שעות", h),
            ServiceHours::Range(lo, hi) => format!("{}–{} שעות (לפי דגם)", lo, hi),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub label: &'static str,
    pub hours: ServiceHours,
    /// The checkpoint that counts as a full internal service.
    pub full_service: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManufacturerPolicy {
    pub checkpoints: &'static [Checkpoint],
    pub time_text: Option<&'static str>,
}

impl ManufacturerPolicy {
    pub fn full_service_hours(&self) -> Option<u32> {
        self.checkpoints
            .iter()
            .find(|c| c.full_service)
            .map(|c| c.hours.lower_bound())
    }

    /// e.g. `"שימון רגליים תחתונות: 50 שעות · טיפול מלא: 100 שעות"`
    pub fn hours_text(&self) -> Option<String> {
        if self.checkpoints.is_empty() {
            return None;
        }
        Some(
            self.checkpoints
                .iter()
                .map(|c| format!("{}: {}", c.label, c.hours.display()))
                .collect::<Vec<_>>()
                .join(" · "),
        )
    }
}

const FULL_SERVICE: &str = "טיפול מלא";

const FOX: ManufacturerPolicy = ManufacturerPolicy {
    checkpoints: &[Checkpoint {
        label: FULL_SERVICE,
        hours: ServiceHours::Fixed(125),
        full_service: true,
    }],
    time_text: Some("או שנה (המוקדם)"),
};

const ROCKSHOX_FORK: ManufacturerPolicy = ManufacturerPolicy {
    checkpoints: &[
        Checkpoint {
            label: "שימון רגליים תחתונות",
            hours: ServiceHours::Fixed(50),
            full_service: false,
        },
        Checkpoint {
            label: FULL_SERVICE,
            hours: ServiceHours::Fixed(100),
            full_service: true,
        },
    ],
    time_text: None,
};

const ROCKSHOX_SHOCK: ManufacturerPolicy = ManufacturerPolicy {
    checkpoints: &[
        Checkpoint {
            label: "שירות אייר-קאן (קפיץ אוויר)",
            hours: ServiceHours::Fixed(50),
            full_service: false,
        },
        Checkpoint {
            label: FULL_SERVICE,
            hours: ServiceHours::Range(100, 200),
            full_service: true,
        },
    ],
    time_text: None,
};

const OHLINS_FORK: ManufacturerPolicy = ManufacturerPolicy {
    checkpoints: &[
        Checkpoint {
            label: "ניקוי רגליים תחתונות",
            hours: ServiceHours::Fixed(50),
            full_service: false,
        },
        Checkpoint {
            label: FULL_SERVICE,
            hours: ServiceHours::Fixed(100),
            full_service: true,
        },
    ],
    time_text: Some("או שנה"),
};

const OHLINS_SHOCK: ManufacturerPolicy = ManufacturerPolicy {
    checkpoints: &[
        Checkpoint {
            label: "שירות קפיץ אוויר",
            hours: ServiceHours::Fixed(100),
            full_service: false,
        },
        Checkpoint {
            label: "שירות דמפר",
            hours: ServiceHours::Fixed(100),
            full_service: true,
        },
    ],
    time_text: Some("או שנה (לדמפר עד שנתיים)"),
};

// PUSH publishes a calendar cadence only.
const PUSH: ManufacturerPolicy = ManufacturerPolicy {
    checkpoints: &[],
    time_text: Some("שנה (שירות מלא)"),
};

pub fn policy_for(brand: Brand, product: ProductType) -> &'static ManufacturerPolicy {
    match (brand, product) {
        (Brand::Fox, _) => &FOX,
        (Brand::RockShox, ProductType::Fork) => &ROCKSHOX_FORK,
        (Brand::RockShox, ProductType::RearShock) => &ROCKSHOX_SHOCK,
        (Brand::Ohlins, ProductType::Fork) => &OHLINS_FORK,
        (Brand::Ohlins, ProductType::RearShock) => &OHLINS_SHOCK,
        (Brand::Push, _) => &PUSH,
    }
}

/// Static distance baseline for brands without an hour cadence.
pub fn legacy_base_km(brand: Brand, product: ProductType) -> u32 {
    match (brand, product) {
        (Brand::Fox, ProductType::Fork) => 1500,
        (Brand::Fox, ProductType::RearShock) => 1000,
        (Brand::RockShox, ProductType::Fork) => 1200,
        (Brand::RockShox, ProductType::RearShock) => 800,
        (Brand::Push, ProductType::Fork) => 1000,
        (Brand::Push, ProductType::RearShock) => 700,
        (Brand::Ohlins, ProductType::Fork) => 1000,
        (Brand::Ohlins, ProductType::RearShock) => 800,
    }
}
