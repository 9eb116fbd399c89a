//! GLDAS-derived soil-moisture record (2018-2024).

/// One row of the recent table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentRecord {
    /// Observation date, `YYYY-MM-DD` (always the 15th).
    pub date: &'static str,
    pub soil_moisture_kg_m2: f64,
    pub year: i32,
    pub month: u32,
}

/// GLDAS V021 deep soil moisture (100-200 cm layer) over Pakistan, 2018-01 through 2024-12.
///
/// Values are absolute soil-moisture mass per area in kg/m², sampled on the
/// 15th of each month. These are not groundwater measurements.
pub static RECENT_SERIES: &[RecentRecord] = &[
    RecentRecord { date: "2018-01-15", soil_moisture_kg_m2: 242.72560958228482, year: 2018, month: 1 },
    RecentRecord { date: "2018-02-15", soil_moisture_kg_m2: 241.75090598549488, year: 2018, month: 2 },
    RecentRecord { date: "2018-03-15", soil_moisture_kg_m2: 244.2691754126007, year: 2018, month: 3 },
    RecentRecord { date: "2018-04-15", soil_moisture_kg_m2: 245.56216485675554, year: 2018, month: 4 },
    RecentRecord { date: "2018-05-15", soil_moisture_kg_m2: 246.26446921231664, year: 2018, month: 5 },
    RecentRecord { date: "2018-06-15", soil_moisture_kg_m2: 245.02240581316974, year: 2018, month: 6 },
    RecentRecord { date: "2018-07-15", soil_moisture_kg_m2: 248.19827299441212, year: 2018, month: 7 },
    RecentRecord { date: "2018-08-15", soil_moisture_kg_m2: 254.96138110227582, year: 2018, month: 8 },
    RecentRecord { date: "2018-09-15", soil_moisture_kg_m2: 254.71285251761014, year: 2018, month: 9 },
    RecentRecord { date: "2018-10-15", soil_moisture_kg_m2: 248.94915861752435, year: 2018, month: 10 },
    RecentRecord { date: "2018-11-15", soil_moisture_kg_m2: 244.53662891056823, year: 2018, month: 11 },
    RecentRecord { date: "2018-12-15", soil_moisture_kg_m2: 242.1259745320422, year: 2018, month: 12 },
    RecentRecord { date: "2019-01-15", soil_moisture_kg_m2: 240.58566308932234, year: 2019, month: 1 },
    RecentRecord { date: "2019-02-15", soil_moisture_kg_m2: 242.11415176557352, year: 2019, month: 2 },
    RecentRecord { date: "2019-03-15", soil_moisture_kg_m2: 248.19070344455628, year: 2019, month: 3 },
    RecentRecord { date: "2019-04-15", soil_moisture_kg_m2: 253.2055454134619, year: 2019, month: 4 },
    RecentRecord { date: "2019-05-15", soil_moisture_kg_m2: 253.41409392825366, year: 2019, month: 5 },
    RecentRecord { date: "2019-06-15", soil_moisture_kg_m2: 251.58221330774035, year: 2019, month: 6 },
    RecentRecord { date: "2019-07-15", soil_moisture_kg_m2: 251.61747926026223, year: 2019, month: 7 },
    RecentRecord { date: "2019-08-15", soil_moisture_kg_m2: 262.5212120002374, year: 2019, month: 8 },
    RecentRecord { date: "2019-09-15", soil_moisture_kg_m2: 263.47140373923327, year: 2019, month: 9 },
    RecentRecord { date: "2019-10-15", soil_moisture_kg_m2: 259.32924466023496, year: 2019, month: 10 },
    RecentRecord { date: "2019-11-15", soil_moisture_kg_m2: 254.1523154725911, year: 2019, month: 11 },
    RecentRecord { date: "2019-12-15", soil_moisture_kg_m2: 252.09271410397469, year: 2019, month: 12 },
    RecentRecord { date: "2020-01-15", soil_moisture_kg_m2: 255.165384926091, year: 2020, month: 1 },
    RecentRecord { date: "2020-02-15", soil_moisture_kg_m2: 255.5156364338498, year: 2020, month: 2 },
    RecentRecord { date: "2020-03-15", soil_moisture_kg_m2: 255.55790050921976, year: 2020, month: 3 },
    RecentRecord { date: "2020-04-15", soil_moisture_kg_m2: 260.25608511383996, year: 2020, month: 4 },
    RecentRecord { date: "2020-05-15", soil_moisture_kg_m2: 261.5525556466432, year: 2020, month: 5 },
    RecentRecord { date: "2020-06-15", soil_moisture_kg_m2: 258.60570644958835, year: 2020, month: 6 },
    RecentRecord { date: "2020-07-15", soil_moisture_kg_m2: 256.1142813948914, year: 2020, month: 7 },
    RecentRecord { date: "2020-08-15", soil_moisture_kg_m2: 264.5472403138439, year: 2020, month: 8 },
    RecentRecord { date: "2020-09-15", soil_moisture_kg_m2: 271.69653630129585, year: 2020, month: 9 },
    RecentRecord { date: "2020-10-15", soil_moisture_kg_m2: 262.97012487554156, year: 2020, month: 10 },
    RecentRecord { date: "2020-11-15", soil_moisture_kg_m2: 258.1178089897938, year: 2020, month: 11 },
    RecentRecord { date: "2020-12-15", soil_moisture_kg_m2: 256.011269941559, year: 2020, month: 12 },
    RecentRecord { date: "2021-01-15", soil_moisture_kg_m2: 253.96805388250152, year: 2021, month: 1 },
    RecentRecord { date: "2021-02-15", soil_moisture_kg_m2: 252.06771787439087, year: 2021, month: 2 },
    RecentRecord { date: "2021-03-15", soil_moisture_kg_m2: 251.04681533407967, year: 2021, month: 3 },
    RecentRecord { date: "2021-04-15", soil_moisture_kg_m2: 250.33471923998223, year: 2021, month: 4 },
    RecentRecord { date: "2021-05-15", soil_moisture_kg_m2: 249.41892305272253, year: 2021, month: 5 },
    RecentRecord { date: "2021-06-15", soil_moisture_kg_m2: 248.44867958007714, year: 2021, month: 6 },
    RecentRecord { date: "2021-07-15", soil_moisture_kg_m2: 247.79099348238086, year: 2021, month: 7 },
    RecentRecord { date: "2021-08-15", soil_moisture_kg_m2: 255.6403522328084, year: 2021, month: 8 },
    RecentRecord { date: "2021-09-15", soil_moisture_kg_m2: 259.4657823834525, year: 2021, month: 9 },
    RecentRecord { date: "2021-10-15", soil_moisture_kg_m2: 257.5103971318112, year: 2021, month: 10 },
    RecentRecord { date: "2021-11-15", soil_moisture_kg_m2: 252.7496016632109, year: 2021, month: 11 },
    RecentRecord { date: "2021-12-15", soil_moisture_kg_m2: 248.60803195012886, year: 2021, month: 12 },
    RecentRecord { date: "2022-01-15", soil_moisture_kg_m2: 248.46464216312714, year: 2022, month: 1 },
    RecentRecord { date: "2022-02-15", soil_moisture_kg_m2: 249.44827102880188, year: 2022, month: 2 },
    RecentRecord { date: "2022-03-15", soil_moisture_kg_m2: 248.62099403979823, year: 2022, month: 3 },
    RecentRecord { date: "2022-04-15", soil_moisture_kg_m2: 247.51561398401233, year: 2022, month: 4 },
    RecentRecord { date: "2022-05-15", soil_moisture_kg_m2: 245.832917316078, year: 2022, month: 5 },
    RecentRecord { date: "2022-06-15", soil_moisture_kg_m2: 244.39961006905375, year: 2022, month: 6 },
    RecentRecord { date: "2022-07-15", soil_moisture_kg_m2: 256.0862579482759, year: 2022, month: 7 },
    RecentRecord { date: "2022-08-15", soil_moisture_kg_m2: 283.0249605257459, year: 2022, month: 8 },
    RecentRecord { date: "2022-09-15", soil_moisture_kg_m2: 280.1122604852647, year: 2022, month: 9 },
    RecentRecord { date: "2022-10-15", soil_moisture_kg_m2: 271.51915293022154, year: 2022, month: 10 },
    RecentRecord { date: "2022-11-15", soil_moisture_kg_m2: 263.313148711739, year: 2022, month: 11 },
    RecentRecord { date: "2022-12-15", soil_moisture_kg_m2: 257.9851659590588, year: 2022, month: 12 },
    RecentRecord { date: "2023-01-15", soil_moisture_kg_m2: 254.2179427758698, year: 2023, month: 1 },
    RecentRecord { date: "2023-02-15", soil_moisture_kg_m2: 252.16884543350974, year: 2023, month: 2 },
    RecentRecord { date: "2023-03-15", soil_moisture_kg_m2: 251.10803820358825, year: 2023, month: 3 },
    RecentRecord { date: "2023-04-15", soil_moisture_kg_m2: 251.18420683129963, year: 2023, month: 4 },
    RecentRecord { date: "2023-05-15", soil_moisture_kg_m2: 250.38026021497174, year: 2023, month: 5 },
    RecentRecord { date: "2023-06-15", soil_moisture_kg_m2: 250.50372162460206, year: 2023, month: 6 },
    RecentRecord { date: "2023-07-15", soil_moisture_kg_m2: 262.9990228756361, year: 2023, month: 7 },
    RecentRecord { date: "2023-08-15", soil_moisture_kg_m2: 274.72771912570994, year: 2023, month: 8 },
    RecentRecord { date: "2023-09-15", soil_moisture_kg_m2: 267.0873136082674, year: 2023, month: 9 },
    RecentRecord { date: "2023-10-15", soil_moisture_kg_m2: 260.3180277624548, year: 2023, month: 10 },
    RecentRecord { date: "2023-11-15", soil_moisture_kg_m2: 254.54226379130918, year: 2023, month: 11 },
    RecentRecord { date: "2023-12-15", soil_moisture_kg_m2: 250.78690799751507, year: 2023, month: 12 },
    RecentRecord { date: "2024-01-15", soil_moisture_kg_m2: 247.97886125004428, year: 2024, month: 1 },
    RecentRecord { date: "2024-02-15", soil_moisture_kg_m2: 246.3781246366567, year: 2024, month: 2 },
    RecentRecord { date: "2024-03-15", soil_moisture_kg_m2: 246.8439260158686, year: 2024, month: 3 },
    RecentRecord { date: "2024-04-15", soil_moisture_kg_m2: 249.87338345433872, year: 2024, month: 4 },
    RecentRecord { date: "2024-05-15", soil_moisture_kg_m2: 252.8860482482843, year: 2024, month: 5 },
    RecentRecord { date: "2024-06-15", soil_moisture_kg_m2: 251.1493385633252, year: 2024, month: 6 },
    RecentRecord { date: "2024-07-15", soil_moisture_kg_m2: 252.12852966402494, year: 2024, month: 7 },
    RecentRecord { date: "2024-08-15", soil_moisture_kg_m2: 270.95178535114854, year: 2024, month: 8 },
    RecentRecord { date: "2024-09-15", soil_moisture_kg_m2: 277.13333089537224, year: 2024, month: 9 },
    RecentRecord { date: "2024-10-15", soil_moisture_kg_m2: 265.27505541854094, year: 2024, month: 10 },
    RecentRecord { date: "2024-11-15", soil_moisture_kg_m2: 257.39029780182034, year: 2024, month: 11 },
    RecentRecord { date: "2024-12-15", soil_moisture_kg_m2: 253.02315027536835, year: 2024, month: 12 },
];
