use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::records::FamilyRecord;

/// Writes survey records to a CSV file.
///
/// Graph names contain commas (`G(2, 2, 4)`), so the name column is always
/// quoted.
pub fn write_csv<P: AsRef<Path>>(records: &[FamilyRecord], path: P) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "family,name,num_nodes,num_edges,gpn")?;
    for record in records {
        writeln!(
            file,
            "{},\"{}\",{},{},{}",
            record.family, record.name, record.num_nodes, record.num_edges, record.gpn
        )?;
    }
    Ok(())
}
