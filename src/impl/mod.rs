// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod festivals_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod festival_record_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod festival_records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod bucket;
        pub(crate) mod calendar_window;
        pub(crate) mod completed_series;
        pub(crate) mod config;
        pub(crate) mod festival_record;
        pub(crate) mod notification_date;
        pub(crate) mod quality_report;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregation_processor;
        pub(crate) mod completion_processor;
        pub(crate) mod missing_buckets_processor;
    }
    pub(crate) mod repositories {
        pub(crate) mod festival_records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod quality_check_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod report_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::bucket::*;
        pub use crate::domain::entities::calendar_window::*;
        pub use crate::domain::entities::completed_series::*;
        pub use crate::domain::entities::config::*;
        pub use crate::domain::entities::festival_record::*;
        pub use crate::domain::entities::notification_date::*;
        pub use crate::domain::entities::quality_report::*;
    }
}
