//! GraphViz document output.

use std::io::{self, Write};

const HEADER: &str = "digraph output {\nnode[shape = Mrecord];\nfontsize=16;\nnodesep=1.5;\nranksep=1;\nrankdir=LR;\n";
const FOOTER: &str = "\n}";

/// Writes the `digraph` document. Edges come out in iteration order.
pub fn write_to<'a, I, W>(edges: I, mut out: W) -> io::Result<()>
where
    I: IntoIterator<Item = &'a String>,
    W: Write,
{
    out.write_all(HEADER.as_bytes())?;
    for edge in edges {
        writeln!(out, "{edge};")?;
    }
    out.write_all(FOOTER.as_bytes())?;
    out.flush()
}

pub fn serialize<'a, I>(edges: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let mut document = String::from(HEADER);
    for edge in edges {
        document.push_str(edge);
        document.push_str(";\n");
    }
    document.push_str(FOOTER);
    document
}
