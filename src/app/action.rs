use crate::catalog::ComponentRecord;

/// Side effects requested by the event handler, executed by the main loop.
#[derive(Debug)]
pub enum Action<'c> {
    CopyMarkup(&'c ComponentRecord),
    Quit,
}
