//! Terminal bell

use std::io::{self, Write};

/// ASCII BEL
const BEL: &[u8] = b"\x07";

/// Write the bell character and flush so it is heard right away
pub(super) fn ring(out: &mut impl Write) -> io::Result<()> {
    out.write_all(BEL)?;
    out.flush()
}
