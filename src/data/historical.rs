//! GRACE-derived groundwater anomaly record (2002-2017).

/// One row of the historical table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalRecord {
    /// Observation date, `YYYY-MM-DD`.
    pub date: &'static str,
    /// Anomaly relative to the mission reference norm, in cm.
    pub groundwater_cm: f64,
}

/// GRACE liquid-water-equivalent anomalies over Pakistan, 2002-03 through 2017-05.
///
/// Values are deviations from the mission reference norm, in centimeters.
/// Sampling is roughly monthly with mission gaps (e.g. 2002-05/06, 2011-05/06).
pub static HISTORICAL_SERIES: &[HistoricalRecord] = &[
    HistoricalRecord { date: "2002-03-31", groundwater_cm: 4.984614313908533 },
    HistoricalRecord { date: "2002-04-30", groundwater_cm: 5.814754618547283 },
    HistoricalRecord { date: "2002-07-31", groundwater_cm: 0.04867335719042135 },
    HistoricalRecord { date: "2002-08-31", groundwater_cm: 3.4341562103880725 },
    HistoricalRecord { date: "2002-09-30", groundwater_cm: 2.7963370185448664 },
    HistoricalRecord { date: "2002-10-31", groundwater_cm: -1.943450598589612 },
    HistoricalRecord { date: "2002-11-30", groundwater_cm: -0.9179619052107035 },
    HistoricalRecord { date: "2002-12-31", groundwater_cm: 0.3525057389556452 },
    HistoricalRecord { date: "2003-01-31", groundwater_cm: 1.2583555383986145 },
    HistoricalRecord { date: "2003-02-28", groundwater_cm: 4.109651624182988 },
    HistoricalRecord { date: "2003-03-31", groundwater_cm: 3.9457885578020537 },
    HistoricalRecord { date: "2003-04-30", groundwater_cm: 3.530293600607493 },
    HistoricalRecord { date: "2003-06-30", groundwater_cm: 3.633617013447585 },
    HistoricalRecord { date: "2003-07-31", groundwater_cm: 4.927979050740946 },
    HistoricalRecord { date: "2003-08-31", groundwater_cm: 6.564707278256534 },
    HistoricalRecord { date: "2003-09-30", groundwater_cm: 3.6247659044735503 },
    HistoricalRecord { date: "2003-10-31", groundwater_cm: 0.8487655760876968 },
    HistoricalRecord { date: "2003-11-30", groundwater_cm: 1.4311141300690275 },
    HistoricalRecord { date: "2003-12-31", groundwater_cm: 1.6091748219724549 },
    HistoricalRecord { date: "2004-02-03", groundwater_cm: 3.8620668756580137 },
    HistoricalRecord { date: "2004-02-29", groundwater_cm: 1.371405022262901 },
    HistoricalRecord { date: "2004-03-31", groundwater_cm: 1.1592015511612779 },
    HistoricalRecord { date: "2004-04-30", groundwater_cm: -0.23651522992060628 },
    HistoricalRecord { date: "2004-05-31", groundwater_cm: -2.8196802600799873 },
    HistoricalRecord { date: "2004-06-30", groundwater_cm: -0.49557020487521675 },
    HistoricalRecord { date: "2004-07-31", groundwater_cm: 2.207392992430363 },
    HistoricalRecord { date: "2004-08-31", groundwater_cm: 0.4968848989210752 },
    HistoricalRecord { date: "2004-09-30", groundwater_cm: -3.018718734085905 },
    HistoricalRecord { date: "2004-10-31", groundwater_cm: -1.6694442958561118 },
    HistoricalRecord { date: "2004-11-30", groundwater_cm: -2.4076644887208785 },
    HistoricalRecord { date: "2004-12-31", groundwater_cm: -0.9378220695844093 },
    HistoricalRecord { date: "2005-01-31", groundwater_cm: 3.7033275767280815 },
    HistoricalRecord { date: "2005-02-28", groundwater_cm: 7.04170763247604 },
    HistoricalRecord { date: "2005-03-31", groundwater_cm: 6.653607362039187 },
    HistoricalRecord { date: "2005-04-30", groundwater_cm: 6.836284842135034 },
    HistoricalRecord { date: "2005-05-31", groundwater_cm: 4.874063497458767 },
    HistoricalRecord { date: "2005-06-30", groundwater_cm: 5.1123189705864815 },
    HistoricalRecord { date: "2005-07-31", groundwater_cm: 5.30146427334633 },
    HistoricalRecord { date: "2005-08-31", groundwater_cm: 3.7126527839358534 },
    HistoricalRecord { date: "2005-09-30", groundwater_cm: 1.038332432600258 },
    HistoricalRecord { date: "2005-10-31", groundwater_cm: -0.1648691690822474 },
    HistoricalRecord { date: "2005-11-30", groundwater_cm: -1.115706520033963 },
    HistoricalRecord { date: "2005-12-31", groundwater_cm: -0.16479472317899632 },
    HistoricalRecord { date: "2006-01-31", groundwater_cm: 0.5208047221864563 },
    HistoricalRecord { date: "2006-02-28", groundwater_cm: 2.3433087262818613 },
    HistoricalRecord { date: "2006-03-31", groundwater_cm: 2.0487647401622997 },
    HistoricalRecord { date: "2006-04-30", groundwater_cm: -0.8291566040514987 },
    HistoricalRecord { date: "2006-05-31", groundwater_cm: -1.363961944698838 },
    HistoricalRecord { date: "2006-06-30", groundwater_cm: -1.728865899320971 },
    HistoricalRecord { date: "2006-07-31", groundwater_cm: 3.535214383297798 },
    HistoricalRecord { date: "2006-08-31", groundwater_cm: 2.962755135262621 },
    HistoricalRecord { date: "2006-09-30", groundwater_cm: -1.1126992595902963 },
    HistoricalRecord { date: "2006-10-31", groundwater_cm: -0.6079972250710521 },
    HistoricalRecord { date: "2006-11-30", groundwater_cm: 2.037439884362653 },
    HistoricalRecord { date: "2006-12-31", groundwater_cm: 1.614756143518921 },
    HistoricalRecord { date: "2007-01-31", groundwater_cm: 2.4564097452102382 },
    HistoricalRecord { date: "2007-02-28", groundwater_cm: 6.424655877557764 },
    HistoricalRecord { date: "2007-03-31", groundwater_cm: 5.0191150326681155 },
    HistoricalRecord { date: "2007-04-30", groundwater_cm: 2.564925451786195 },
    HistoricalRecord { date: "2007-05-31", groundwater_cm: 1.2506733741812959 },
    HistoricalRecord { date: "2007-06-30", groundwater_cm: 3.9544648826972146 },
    HistoricalRecord { date: "2007-07-31", groundwater_cm: 3.596024739645588 },
    HistoricalRecord { date: "2007-08-31", groundwater_cm: 2.4429253946665304 },
    HistoricalRecord { date: "2007-09-30", groundwater_cm: -1.3924494341661557 },
    HistoricalRecord { date: "2007-10-31", groundwater_cm: -3.3367988846100682 },
    HistoricalRecord { date: "2007-11-30", groundwater_cm: -5.1275957736435345 },
    HistoricalRecord { date: "2007-12-31", groundwater_cm: -3.0725045179590236 },
    HistoricalRecord { date: "2008-01-31", groundwater_cm: -1.1511774459111401 },
    HistoricalRecord { date: "2008-02-29", groundwater_cm: -1.5890012981249364 },
    HistoricalRecord { date: "2008-03-31", groundwater_cm: -0.9319585556889302 },
    HistoricalRecord { date: "2008-04-30", groundwater_cm: -3.2770425859972887 },
    HistoricalRecord { date: "2008-05-31", groundwater_cm: -3.94020806156403 },
    HistoricalRecord { date: "2008-06-30", groundwater_cm: -0.4309328611341064 },
    HistoricalRecord { date: "2008-07-31", groundwater_cm: 2.5918718754159524 },
    HistoricalRecord { date: "2008-08-31", groundwater_cm: -0.5114395935253572 },
    HistoricalRecord { date: "2008-09-30", groundwater_cm: -3.569646726255136 },
    HistoricalRecord { date: "2008-10-31", groundwater_cm: -4.407825440531386 },
    HistoricalRecord { date: "2008-11-30", groundwater_cm: -5.685106965115549 },
    HistoricalRecord { date: "2008-12-31", groundwater_cm: -3.7768018821821303 },
    HistoricalRecord { date: "2009-01-31", groundwater_cm: -2.3038567500553317 },
    HistoricalRecord { date: "2009-02-28", groundwater_cm: -1.0114458737539918 },
    HistoricalRecord { date: "2009-03-31", groundwater_cm: 0.5590713285733467 },
    HistoricalRecord { date: "2009-04-30", groundwater_cm: -0.2268539834751581 },
    HistoricalRecord { date: "2009-05-31", groundwater_cm: -3.5868735446882867 },
    HistoricalRecord { date: "2009-06-30", groundwater_cm: -3.301988129364219 },
    HistoricalRecord { date: "2009-07-31", groundwater_cm: -3.5430000760681915 },
    HistoricalRecord { date: "2009-08-31", groundwater_cm: -4.170214404522713 },
    HistoricalRecord { date: "2009-09-30", groundwater_cm: -7.090586537795437 },
    HistoricalRecord { date: "2009-10-31", groundwater_cm: -7.6616460159490245 },
    HistoricalRecord { date: "2009-11-30", groundwater_cm: -7.074112052087352 },
    HistoricalRecord { date: "2009-12-31", groundwater_cm: -5.963182211455265 },
    HistoricalRecord { date: "2010-01-31", groundwater_cm: -4.7270912189273036 },
    HistoricalRecord { date: "2010-02-28", groundwater_cm: -4.579712597582613 },
    HistoricalRecord { date: "2010-03-31", groundwater_cm: -6.16561065871185 },
    HistoricalRecord { date: "2010-04-30", groundwater_cm: -5.518545166584018 },
    HistoricalRecord { date: "2010-05-31", groundwater_cm: -5.370357310776395 },
    HistoricalRecord { date: "2010-06-30", groundwater_cm: -5.669517777147831 },
    HistoricalRecord { date: "2010-07-31", groundwater_cm: 1.1242051819968406 },
    HistoricalRecord { date: "2010-08-31", groundwater_cm: 0.6530464733049557 },
    HistoricalRecord { date: "2010-09-30", groundwater_cm: -1.299960235919641 },
    HistoricalRecord { date: "2010-10-31", groundwater_cm: -4.290265804684935 },
    HistoricalRecord { date: "2010-11-30", groundwater_cm: -3.7597312995474095 },
    HistoricalRecord { date: "2011-02-07", groundwater_cm: -0.8213976872923249 },
    HistoricalRecord { date: "2011-02-28", groundwater_cm: -1.0035814042845286 },
    HistoricalRecord { date: "2011-03-31", groundwater_cm: -1.2681352811830127 },
    HistoricalRecord { date: "2011-04-30", groundwater_cm: -3.9935217586756524 },
    HistoricalRecord { date: "2011-07-06", groundwater_cm: -3.016600282423504 },
    HistoricalRecord { date: "2011-07-31", groundwater_cm: -1.9266387470341202 },
    HistoricalRecord { date: "2011-08-31", groundwater_cm: 2.0518786841431247 },
    HistoricalRecord { date: "2011-09-30", groundwater_cm: -1.5139826232665206 },
    HistoricalRecord { date: "2011-10-16", groundwater_cm: -1.893572567291295 },
    HistoricalRecord { date: "2011-12-18", groundwater_cm: -4.56633322869938 },
    HistoricalRecord { date: "2011-12-31", groundwater_cm: -3.7823882194911045 },
    HistoricalRecord { date: "2012-01-31", groundwater_cm: -2.8559877921965757 },
    HistoricalRecord { date: "2012-02-29", groundwater_cm: -0.7486890294513279 },
    HistoricalRecord { date: "2012-03-31", groundwater_cm: -2.936193101662576 },
    HistoricalRecord { date: "2012-05-31", groundwater_cm: -6.9296001773114 },
    HistoricalRecord { date: "2012-06-30", groundwater_cm: -6.525232132491529 },
    HistoricalRecord { date: "2012-07-31", groundwater_cm: -3.916146192674352 },
    HistoricalRecord { date: "2012-08-31", groundwater_cm: -1.202381456384416 },
    HistoricalRecord { date: "2012-11-08", groundwater_cm: -6.256732809300775 },
    HistoricalRecord { date: "2012-11-30", groundwater_cm: -7.7399046045993956 },
    HistoricalRecord { date: "2012-12-31", groundwater_cm: -5.1427149765415185 },
    HistoricalRecord { date: "2013-01-31", groundwater_cm: -4.705150809228413 },
    HistoricalRecord { date: "2013-04-11", groundwater_cm: -3.031269695071177 },
    HistoricalRecord { date: "2013-04-30", groundwater_cm: -5.297506167321283 },
    HistoricalRecord { date: "2013-05-31", groundwater_cm: -5.5565223439696805 },
    HistoricalRecord { date: "2013-06-30", groundwater_cm: -4.425556506406102 },
    HistoricalRecord { date: "2013-09-30", groundwater_cm: -4.971279410901683 },
    HistoricalRecord { date: "2013-10-31", groundwater_cm: -4.2714301058735105 },
    HistoricalRecord { date: "2013-11-30", groundwater_cm: -5.72035883394286 },
    HistoricalRecord { date: "2013-12-31", groundwater_cm: -5.7952668221773544 },
    HistoricalRecord { date: "2014-03-02", groundwater_cm: -4.751924284498791 },
    HistoricalRecord { date: "2014-03-31", groundwater_cm: -4.421089685410443 },
    HistoricalRecord { date: "2014-04-30", groundwater_cm: -3.482334357390882 },
    HistoricalRecord { date: "2014-05-31", groundwater_cm: -5.7257490897178025 },
    HistoricalRecord { date: "2014-07-31", groundwater_cm: -5.122134827281715 },
    HistoricalRecord { date: "2014-08-31", groundwater_cm: -4.871943981769497 },
    HistoricalRecord { date: "2014-09-30", groundwater_cm: -5.820559877743995 },
    HistoricalRecord { date: "2014-10-31", groundwater_cm: -7.568125216710801 },
    HistoricalRecord { date: "2015-01-12", groundwater_cm: -9.206333483909958 },
    HistoricalRecord { date: "2015-01-31", groundwater_cm: -9.562592811455342 },
    HistoricalRecord { date: "2015-02-28", groundwater_cm: -5.3521526416599725 },
    HistoricalRecord { date: "2015-03-31", groundwater_cm: -3.5865349801086035 },
    HistoricalRecord { date: "2015-04-11", groundwater_cm: -4.398072092852439 },
    HistoricalRecord { date: "2015-06-28", groundwater_cm: -0.01516353728083296 },
    HistoricalRecord { date: "2015-07-31", groundwater_cm: -0.47600675175410084 },
    HistoricalRecord { date: "2015-08-31", groundwater_cm: -2.777094749941509 },
    HistoricalRecord { date: "2015-12-10", groundwater_cm: -9.071041452025357 },
    HistoricalRecord { date: "2016-01-03", groundwater_cm: -8.65874532126405 },
    HistoricalRecord { date: "2016-01-28", groundwater_cm: -7.937450451012359 },
    HistoricalRecord { date: "2016-02-29", groundwater_cm: -6.1505392212623535 },
    HistoricalRecord { date: "2016-05-08", groundwater_cm: -4.23215358120684 },
    HistoricalRecord { date: "2016-05-31", groundwater_cm: -7.309258743378301 },
    HistoricalRecord { date: "2016-06-30", groundwater_cm: -6.829327871943766 },
    HistoricalRecord { date: "2016-08-07", groundwater_cm: -1.9680983050845136 },
    HistoricalRecord { date: "2016-11-13", groundwater_cm: -11.16232723060661 },
    HistoricalRecord { date: "2016-12-10", groundwater_cm: -14.306798191379029 },
    HistoricalRecord { date: "2017-01-06", groundwater_cm: -9.527825366696883 },
    HistoricalRecord { date: "2017-03-16", groundwater_cm: -5.1400037609048255 },
    HistoricalRecord { date: "2017-04-09", groundwater_cm: -7.786680534337866 },
    HistoricalRecord { date: "2017-05-01", groundwater_cm: -8.863997300111002 },
    HistoricalRecord { date: "2017-05-22", groundwater_cm: -8.727905291100553 },
];
