// nml/tests/ramsin_roundtrip.rs

//! Integration test against a realistic RAMSIN fragment in the `$GROUP` /
//! `$END` form the BRAMS model distributes.

use ramsinrs_nml::{reads, NmlValue, WriteOptions};

const RAMSIN_FIXTURE: &str = r#"
 $MODEL_ADV_RAMSIN
    ADVANCED_RAMSIN = './RAMSIN_ADVANCED'
 $END

 $MODEL_GRIDS

! Simulation title (64 chars)
    EXPNME   = 'BRAMS light run',
    RUNTYPE  = 'INITIAL',
    TIMEUNIT = 'h',
    TIMMAX   = 24,
    IMONTH1  = 08,
    IDATE1   = 10,
    IYEAR1   = 2015,
    ITIME1   = 0000,
    NNXP     = 66,
    NNYP     = 66,
    NNZP     = 45,
    NZG      = 9,
    NZS      = 1,
    DELTAX   = 50000.,
    DELTAY   = 50000.,
    DELTAZ   = 70.,
    DZRAT    = 1.09,
    DZMAX    = 750.,
    FIXLEVELS = 0,
    ZZ       = 0.0, 50.0, 2*100.0,
    DTLONG   = 60.,
    POLELAT  = -23.,
    POLELON  = -46.,
    CENTLAT  = -23.,
    CENTLON  = -46.,
 $END

 $POST
    NVP = 2,
    VP  = 'topo', 'precip',
    IPLEVS = 500, 400, 300, 200,
 $END
"#;

#[test]
fn test_parse_ramsin_fixture() {
    let nml = reads(RAMSIN_FIXTURE).expect("failed to parse RAMSIN fixture");

    assert_eq!(
        nml.group_names(),
        &[
            "model_adv_ramsin".to_string(),
            "model_grids".to_string(),
            "post".to_string()
        ]
    );

    let grids = nml.get_group("model_grids").unwrap();
    assert_eq!(grids.get_string("expnme"), Some("BRAMS light run"));
    assert_eq!(grids.get_i64("timmax"), Some(24));
    assert_eq!(grids.get_f64("deltax"), Some(50000.0));
    assert_eq!(grids.get_f64("dtlong"), Some(60.0));
    // Repeat expression expanded in file order.
    assert_eq!(
        grids.get("zz").unwrap(),
        &NmlValue::from(vec![0.0, 50.0, 100.0, 100.0])
    );

    let adv = nml.get_group("model_adv_ramsin").unwrap();
    assert_eq!(adv.get_string("advanced_ramsin"), Some("./RAMSIN_ADVANCED"));
}

#[test]
fn test_ramsin_fixture_roundtrip() {
    let nml = reads(RAMSIN_FIXTURE).unwrap();

    let regenerated = nml.to_fortran_string(&WriteOptions::default());
    assert!(regenerated.starts_with("$model_adv_ramsin"));

    let reparsed = reads(&regenerated).expect("failed to reparse regenerated namelist");
    assert_eq!(nml, reparsed);
}

#[test]
fn test_field_order_preserved() {
    let nml = reads(RAMSIN_FIXTURE).unwrap();
    let grids = nml.get_group("model_grids").unwrap();

    let names: Vec<&str> = grids.variable_names().iter().map(|s| s.as_str()).collect();
    assert_eq!(&names[..4], &["expnme", "runtype", "timeunit", "timmax"]);
    assert_eq!(names.last(), Some(&"centlon"));
}
