// ramsinrs/src/schema/basic.rs

//! Registry for the RAMSIN_BASIC document.

use super::{
    group, int, int_list, on_off, positive_int, positive_real, real, real_list, str_list, string,
    Constraint, FieldRef, Schema,
};
use lazy_static::lazy_static;

const DTLONG: FieldRef = FieldRef::new("model_grids", "dtlong");

lazy_static! {
    static ref BASIC: Schema = build();
}

/// The registry for the RAMSIN_BASIC document.
pub fn basic() -> &'static Schema {
    &BASIC
}

fn build() -> Schema {
    Schema::new(
        "basic",
        vec![
            group(
                "model_adv_ramsin",
                vec![string("advanced_ramsin").with(Constraint::NonEmpty)],
            ),
            group(
                "model_grids",
                vec![
                    string("expnme").with(Constraint::NonEmpty),
                    string("runtype").with(Constraint::StrChoice(&[
                        "MAKESFC",
                        "MAKEVFILE",
                        "INITIAL",
                        "HISTORY",
                        "MEMORY",
                    ])),
                    string("timeunit").with(Constraint::StrChoice(&["h", "m", "s"])),
                    positive_int("timmax"),
                    positive_int("imonth1"),
                    positive_int("idate1"),
                    positive_int("iyear1"),
                    int("itime1"),
                    positive_int("nnxp"),
                    positive_int("nnyp"),
                    positive_int("nnzp"),
                    positive_int("nzg"),
                    positive_int("nzs"),
                    positive_real("deltax"),
                    positive_real("deltay"),
                    real("deltaz"),
                    real("dzrat"),
                    real("dzmax"),
                    int("fixlevels"),
                    real_list("zz").with(Constraint::LengthOf {
                        count: FieldRef::new("model_grids", "nnzp"),
                        when_zero: Some(FieldRef::new("model_grids", "deltaz")),
                    }),
                    real("dtlong").with(Constraint::Range {
                        min: Some(1.0),
                        max: None,
                    }),
                    real("polelat"),
                    real("polelon"),
                    real("centlat"),
                    real("centlon"),
                ],
            ),
            group(
                "ccatt_info",
                vec![
                    on_off("ccatt"),
                    int("chemistry").with(Constraint::IntChoice(&[-1, 0, 1, 2, 3, 4])),
                    real("chem_timestep").with(Constraint::MultipleOf {
                        of: DTLONG,
                        max_ratio: Some(4.0),
                        when_eq: Some((FieldRef::new("ccatt_info", "ccatt"), 1)),
                    }),
                    on_off("chem_assim"),
                    string("srcmapfn"),
                    on_off("aerosol"),
                    on_off("aer_assim"),
                    real("aer_timestep").with(Constraint::MultipleOf {
                        of: DTLONG,
                        max_ratio: Some(4.0),
                        when_eq: Some((FieldRef::new("ccatt_info", "aerosol"), 1)),
                    }),
                ],
            ),
            group(
                "model_file_info",
                vec![
                    int("initial"),
                    string("varfpfx"),
                    real("tnudcent"),
                    int("nudlat"),
                    real("tnudlat"),
                    real("tnudtop"),
                    real("znudtop"),
                    int("ipos"),
                    int("ioutput").with(Constraint::IntChoice(&[0, 1, 2])),
                    string("hfilout"),
                    string("afilout"),
                    real("frqhis"),
                    real("frqanl")
                        .with(Constraint::Range {
                            min: Some(1.0),
                            max: None,
                        })
                        .with(Constraint::MultipleOf {
                            of: DTLONG,
                            max_ratio: None,
                            when_eq: None,
                        }),
                    string("topfiles"),
                    string("sfcfiles"),
                    string("sstfpfx"),
                    string("ndvifpfx"),
                    string("itoptfn"),
                    string("isstfn"),
                    string("ivegtfn"),
                    string("isoilfn"),
                    string("ndvifn"),
                ],
            ),
            group(
                "model_options",
                vec![
                    int("iswrtyp"),
                    int("ilwrtyp").with(Constraint::IntChoice(&[0, 1, 2, 3, 4, 5, 6])),
                    real("radfrq"),
                    int("nnqparm").with(Constraint::IntChoice(&[0, 1, 2, 3, 4, 5, 6, 7, 8])),
                    string("closure_type").with(Constraint::StrChoice(&[
                        "PB", "EN", "GR", "LO", "MC", "SC", "AS",
                    ])),
                    int("nnshcu").with(Constraint::IntChoice(&[0, 1, 2, 3])),
                    real("confrq"),
                    real("shcufrq"),
                    int("isfcl").with(Constraint::IntChoice(&[0, 1, 2, 3, 4, 5])),
                    on_off("isfcl_ocean"),
                    string("soil_moist_fail").with(Constraint::StrChoice(&["s", "h", "l"])),
                    string("usdata_in"),
                    string("usmodel_in"),
                    int("mcphys_type").with(Constraint::IntChoice(&[0, 1, 2, 3, 4, 5, 6, 7])),
                    int("level"),
                ],
            ),
            group(
                "isan_control",
                vec![int("isan_inc"), string("iapr"), string("varpfx")],
            ),
            group(
                "isan_isentropic",
                vec![
                    int("icfiletype"),
                    string("icprefix"),
                    string("wind_u_varname"),
                    string("wind_v_varname"),
                    string("temperature_varname"),
                    string("geo_varname"),
                    string("ur_varname"),
                    real("initial_latitude"),
                    real("final_latitude"),
                    real("initial_longitude"),
                    real("final_longitude"),
                    int("z_max_level"),
                    real_list("scale_factor"),
                ],
            ),
            group(
                "post",
                vec![
                    int("nvp"),
                    str_list("vp"),
                    string("gprefix"),
                    string("csvfile"),
                    string("anl2gra"),
                    string("proj"),
                    string("mean_type"),
                    real_list("lati"),
                    real_list("latf"),
                    real_list("loni"),
                    real_list("lonf"),
                    int_list("zlevmax"),
                    int("ipresslev"),
                    int("inplevs"),
                    int_list("iplevs")
                        .with(Constraint::LengthOf {
                            count: FieldRef::new("post", "inplevs"),
                            when_zero: None,
                        })
                        .with(Constraint::SumEq(6.0)),
                    string("ascii_data"),
                    real("site_lat"),
                    real("site_lon"),
                ],
            ),
        ],
    )
}
