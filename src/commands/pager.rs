use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Adapts the minus pager to `std::io::Write`.
///
/// The pager only exposes `push_str`, so this wrapper lets the diff
/// printer treat it as a drop-in replacement for stdout.
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Picks an output writer for a command that may produce long output.
///
/// Pages only when stdout is a terminal and `NO_PAGER` is unset;
/// otherwise writes straight to stdout. The returned pager, when
/// present, must be handed to [`page_output`] after printing.
pub fn stdout_writer() -> (Box<dyn Write>, Option<Pager>) {
    let interactive =
        std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none();

    if interactive {
        let pager = Pager::new();
        let writer = PagerWriter {
            pager: pager.clone(),
        };
        (Box::new(writer), Some(pager))
    } else {
        (Box::new(std::io::stdout()), None)
    }
}

/// Displays everything pushed to the pager, if one was engaged.
pub fn page_output(pager: Option<Pager>) -> anyhow::Result<()> {
    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
