// ramsinrs/src/schema/advanced.rs

//! Registry for the RAMSIN_ADVANCED document.

use super::{
    group, int, int_list, logical, on_off, real, real_list, str_list, string, Constraint,
    FieldRef, Schema,
};
use lazy_static::lazy_static;

lazy_static! {
    static ref ADVANCED: Schema = build();
}

/// The registry for the RAMSIN_ADVANCED document.
pub fn advanced() -> &'static Schema {
    &ADVANCED
}

fn build() -> Schema {
    Schema::new(
        "advanced",
        vec![
            group(
                "model_grids2",
                vec![
                    on_off("ihtran"),
                    int("ideltat").with(Constraint::IntChoice(&[0, 1, 2])),
                    int("nestz1"),
                    int("nestz2"),
                    real_list("deltaxn"),
                    real_list("deltayn"),
                    real_list("deltazn"),
                    real_list("dtlongn"),
                    int_list("nstratx"),
                    int_list("nstraty"),
                    int_list("nndtrat"),
                    int_list("nstratz1"),
                    int_list("nstratz2"),
                    int_list("ninest"),
                    int_list("njnest"),
                    int_list("nknest"),
                    int_list("nnsttop"),
                    int_list("nnstbot"),
                    int_list("nxtnest"),
                    real_list("centlatn"),
                    real_list("centlonn"),
                    real_list("polelatn"),
                    real_list("polelonn"),
                ],
            ),
            group(
                "ccatt_info2",
                vec![
                    on_off("chemistry_aq"),
                    string("split_method").with(Constraint::StrChoice(&[
                        "SYMMETRIC",
                        "SEQUENTIAL",
                        "PARALLEL",
                    ])),
                    on_off("recycle_tracers"),
                    on_off("plumerise"),
                    on_off("volcanoes"),
                    string("def_proc_src")
                        .with(Constraint::StrChoice(&["STOP", "LAST_SOURCES"])),
                    int_list("diur_cycle"),
                    int("na_extra2d"),
                    int("na_extra3d"),
                    string("firemapfn"),
                ],
            ),
            group(
                "teb_spm_info",
                vec![
                    on_off("teb_spm"),
                    string("fusfiles"),
                    int_list("ifusflg"),
                    str_list("ifusfn"),
                ],
            ),
            group(
                "model_file_info2",
                vec![
                    int("nud_type").with(Constraint::IntChoice(&[0, 1, 2])),
                    string("nud_hfile"),
                    string("varfile"),
                    on_off("iclobber"),
                    on_off("ihistdel"),
                    on_off("ipastin"),
                    on_off("kwrite"),
                    on_off("initfld"),
                    on_off("iupdndvi"),
                    on_off("iupdsst"),
                    on_off("mkcoltab"),
                    int("applyiau").with(Constraint::IntChoice(&[0, 1, 2])),
                    string("coltabfn"),
                    string("mapaotfile"),
                    real_list("wt_nudge_grid"),
                    real_list("wt_nudgec_grid"),
                    real("tnudtop2"),
                    int_list("itoptflg"),
                    int_list("isstflg"),
                    int_list("ivegtflg"),
                    int_list("isoilflg"),
                    int_list("ndviflg"),
                    int_list("nofilflg"),
                    int_list("itopsflg"),
                    int_list("iz0flg"),
                    real_list("toptenh"),
                    real_list("toptwvl"),
                    real_list("z0max"),
                    real("z0fact"),
                ],
            ),
            group(
                "model_options2",
                vec![
                    int("dyncore_flag").with(Constraint::IntChoice(&[0, 1, 2, 3])),
                    int("advmnt").with(Constraint::IntChoice(&[0, 1, 2])),
                    int("iexev").with(Constraint::IntChoice(&[1, 2])),
                    int("ibnd"),
                    int("jbnd").with(Constraint::IntChoice(&[1, 2, 3, 4])),
                    int("lsflg").with(Constraint::IntChoice(&[0, 1, 2, 3])),
                    int("nfpt"),
                    real("distim"),
                    real("cphas"),
                    int("naddsc"),
                    int("npatch").with(Constraint::Range {
                        min: Some(2.0),
                        max: None,
                    }),
                    int("nvegpat")
                        .with(Constraint::Range {
                            min: Some(1.0),
                            max: None,
                        })
                        .with(Constraint::LessThanField(FieldRef::new(
                            "model_options2",
                            "npatch",
                        ))),
                    int("nvgcon").with(Constraint::IntChoice(&[
                        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
                    ])),
                    int("nslcon").with(Constraint::IntChoice(&[
                        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12,
                    ])),
                    int("ihorgrad").with(Constraint::IntChoice(&[1, 2])),
                    on_off("irime"),
                    on_off("iplaws"),
                    on_off("icorflg"),
                    on_off("imassflx"),
                    on_off("lonrad"),
                    on_off("g3d_spread"),
                    int_list("idiffk")
                        .with(Constraint::IntElemChoice(&[1, 2, 3, 4, 5, 6, 7, 8])),
                    string("soil_moist").with(Constraint::StrChoice(&["n", "i", "h", "a"])),
                    real("zrough"),
                    real("pctlcon"),
                    real("albedo"),
                    real("seatmp"),
                    real("dthcon"),
                    real("drtcon"),
                    real_list("slz"),
                    real_list("slmstr"),
                    real_list("stgoff"),
                    real_list("csx"),
                    real_list("csz"),
                    real_list("xkhkm"),
                    real_list("zkhkm"),
                    real_list("akmin"),
                    real_list("gnu"),
                ],
            ),
            group(
                "model_sound",
                vec![
                    on_off("ipsflg"),
                    int("itsflg").with(Constraint::IntChoice(&[0, 1, 2])),
                    int("irtsflg").with(Constraint::IntChoice(&[0, 1, 2, 3, 4])),
                    on_off("iusflg"),
                    real("hs"),
                    real_list("ps"),
                    real_list("ts"),
                    real_list("rts"),
                    real_list("us"),
                    real_list("vs"),
                ],
            ),
            group(
                "model_print",
                vec![
                    int("nplt").with(Constraint::Range {
                        min: Some(0.0),
                        max: Some(50.0),
                    }),
                    int("initial_print"),
                    real("frqprt"),
                    int_list("ixsctn").with(Constraint::IntElemChoice(&[1, 2, 3])),
                    int_list("isbval"),
                    str_list("iplfld").with(Constraint::StrElemChoice(&[
                        "UP", "VP", "WP", "PP", "THP", "RT", "RC", "PCPT", "TKE", "HSCL", "RR",
                        "RP", "RA", "TV", "CP", "RV", "RTP", "VSCL", "THETA", "RL", "TG", "SLM",
                        "THVP", "RI", "RCOND", "CONPR", "CONP", "CONH", "CONM", "THIL", "TEMP",
                        "TVP", "THV", "RELHUM", "SPEED", "FTHRD", "MICRO", "Z0", "ZI", "ZMAT",
                        "USTARL", "USTARW", "TSTARL", "TSTARW", "RSTARL", "RSTARW", "UW", "VW",
                        "WFZ", "TFZ", "QFZ", "RLONG", "RSHORT",
                    ])),
                ],
            ),
            group(
                "isan_control2",
                vec![
                    int("iszstage"),
                    int("ivrstage"),
                    string("guess1st").with(Constraint::StrChoice(&["PRESS", "RAMS"])),
                    int("i1st_flg").with(Constraint::IntChoice(&[1, 2, 3])),
                    int("iupa_flg").with(Constraint::IntChoice(&[1, 2, 3])),
                    int("isfc_flg").with(Constraint::IntChoice(&[1, 2, 3])),
                    on_off("ioflgisz"),
                    on_off("ioflgvar"),
                    string("iszpref"),
                    string("ivarpref"),
                    int_list("levth"),
                ],
            ),
            group(
                "isan_isentropic2",
                vec![
                    int("nisn"),
                    int("nigrids"),
                    real("sigzwt"),
                    int("nfeedvar"),
                    int("maxsta"),
                    int("maxsfc"),
                    int("notsta"),
                    string("notid"),
                    real("stasep"),
                    int("igridfl"),
                    real_list("gridwt"),
                    real_list("wvlnth"),
                    real_list("swvlnth"),
                    real_list("respon"),
                    real("topsigz"),
                    real("hybbot"),
                    real("hybtop"),
                    real("sfcinf"),
                ],
            ),
            group(
                "digitalfilter",
                vec![on_off("applydf"), real("filttimewin")],
            ),
            group(
                "meteogram",
                vec![
                    logical("applymeteogram"),
                    real("meteogramfreq"),
                    string("meteogramfile"),
                    string("meteogrammap"),
                    string("meteogramdir"),
                ],
            ),
        ],
    )
}
