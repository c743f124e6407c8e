// Write `scales.html`: every built-in family, then the scales generated
// for the colors given on the command line (default: #3B82F6).
//
//     RUST_LOG=radiant_scales=debug cargo run --example scales -- '#e5484d'

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use radiant_scales::{builtin_scale, create_custom_scale, validate_scale,
                     ColorFamily, ColorScale, CustomScaleOptions, Mode,
                     ScaleSource};
use tracing_subscriber::EnvFilter;

type Err = Box<dyn Error>;

fn background(mode: Mode) -> &'static str {
    match mode { Mode::Light => "#ffffff", Mode::Dark => "#111111" }
}

fn table_of_colors(fh: &mut impl Write, scale: &ColorScale, mode: Mode,
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px; border-spacing: 0px; \
                  background-color: {}\"><tr>", background(mode))?;
    for (_, c) in scale.iter() {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {c}\" title=\"{c}\"></td>")?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px; background-color: #fff\">\
                  {comment}</td></tr></table>")?;
    Ok(())
}

fn source(fh: &mut impl Write, s: &ScaleSource) -> Result<(), Err> {
    writeln!(fh, "<h4>{}</h4>", s.name())?;
    for mode in [Mode::Light, Mode::Dark] {
        let v = validate_scale(s.scale(mode, false), mode);
        let comment = if v.valid { format!("{mode:?}") }
                      else { format!("{mode:?}: {}", v.issues.join("; ")) };
        table_of_colors(fh, s.scale(mode, false), mode, 40, &comment)?;
        table_of_colors(fh, s.scale(mode, true), mode, 40,
                        &format!("{mode:?} alpha"))?;
    }
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
                         .unwrap_or_else(|_| EnvFilter::new("radiant_scales=warn")))
        .init();

    let mut bases: Vec<String> = env::args().skip(1).collect();
    if bases.is_empty() { bases.push("#3B82F6".to_string()) }

    let mut fh = BufWriter::new(File::create("scales.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>radiant-scales</title>\n\
                  </head>\n\
                  <body>")?;

    writeln!(fh, "<h3>Generated</h3>")?;
    for (i, base) in bases.iter().enumerate() {
        let options = CustomScaleOptions::new(format!("custom{i} ({base})"),
                                              base.as_str());
        source(&mut fh, &create_custom_scale(&options)?.into())?;
    }

    writeln!(fh, "<h3>Built-in</h3>")?;
    for f in ColorFamily::ALL {
        source(&mut fh, &f.into())?;
    }

    writeln!(fh, "<h3>Solid steps side by side</h3>")?;
    for mode in [Mode::Light, Mode::Dark] {
        for f in ColorFamily::ALL.iter().filter(|f| !f.is_neutral()) {
            table_of_colors(&mut fh, builtin_scale(*f, mode, false), mode,
                            20, f.name())?;
        }
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
