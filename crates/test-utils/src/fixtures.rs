//! Common test fixtures for gds-viewer tests.
//!
//! The data mirrors the published bucket layout: two metadata tables,
//! curve CSVs under `csv/<Type>...`, archived logs under `las/`.

/// Bucket names used by the service defaults.
pub mod buckets {
    pub const METADATA: &str = "for-metadata";
    pub const VISUALIZATION: &str = "transformed-for-visualization-data-1";
    pub const DOWNLOAD: &str = "transformed-for-download-data";
}

/// Metadata tables.
pub mod metadata {
    pub const CURVE_INDEX_KEY: &str = "List_of_curves.csv";
    pub const GEOLOGY_KEY: &str = "List_of_data-new.csv";

    /// WellA has two segments; WellC's age is outside the geology vocabulary;
    /// WellD's Type has no curve file.
    pub const CURVE_INDEX: &str = "\
Name,lat,lon,Age,Type,Depth_start,Depth_finish
WellA,42.1,-93.5,Triassic_Cretaceous,Gamma,100.0,200.0
WellA,42.1,-93.5,Triassic_Cretaceous,Gamma,200.0,350.5
WellB,43.0,-94.0,Jurassic,Resistivity,50.0,75.0
WellC,30.5,-100.25,Permian,Gamma,10.0,20.0
WellD,44.5,-92.0,Jurassic_Triassic,Sonic,0.0,10.0
";

    pub const GEOLOGY: &str = "\
Geological_Time,Era
Triassic,Mesozoic
Jurassic,Mesozoic
Triassic,Mesozoic
";
}

/// Curve-data files.
pub mod curves {
    pub const GAMMA_KEY: &str = "csv/Gamma/gamma_curves.csv";
    pub const GAMMA_SECOND_KEY: &str = "csv/Gamma/gamma_curves_old.csv";
    pub const RESISTIVITY_KEY: &str = "csv/Resistivity_all.csv";

    pub const GAMMA: &str = "\
Well_name,Gamma,DEPTH
WellA,45.2,100.0
WellA,47.9,100.5
WellC,12.0,10.0
WellA,50.1,101.0
";

    pub const RESISTIVITY: &str = "\
Well_name,ILD,DEPTH
WellB,2.5,50.0
WellB,2.7,50.5
";
}

/// Archived LAS files.
pub mod las {
    pub const WELL_A_FIRST_KEY: &str = "las/20230101_42.1_-93.5_100.0_200.0_WellA.las";
    pub const WELL_B_KEY: &str = "las/2023/43.0_-94.0_50.0_75.0_WellB_v1.las";

    pub const WELL_A_FIRST: &str = "~Version\nVERS. 2.0\n~Well\nWELL. WellA\n";
    pub const WELL_B: &str = "~Version\nVERS. 2.0\n~Well\nWELL. WellB\n";
}
