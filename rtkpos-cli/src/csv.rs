//! helpers to export to CSV if desired,
//! and not only generate HTML plots.
use rtkpos::prelude::Comparison;
use std::io::Write;

/// Exports the height differences, one matched epoch per line:
/// `timestamp, longitude, |dh|`
pub fn csv_export_height_difference<W: Write>(
    w: &mut W,
    cmp: &Comparison,
) -> Result<(), std::io::Error> {
    writeln!(w, "================================================")?;
    writeln!(w, "title  : height difference |emlid - rtk|")?;
    writeln!(w, "labels : timestamp, longitude [°], |dh| [m]")?;
    writeln!(w, "mean   : {:.6E}", cmp.difference.mean)?;
    writeln!(w, "version: rtkpos v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(w, "================================================")?;
    for (t, (lon, dh)) in cmp
        .alignment
        .timestamps
        .iter()
        .zip(cmp.difference.points.iter())
    {
        writeln!(w, "{}, {:.9}, {:.6E}", t, lon, dh)?;
    }
    writeln!(w, "================================================")?;
    Ok(())
}
