// Licensed under the Apache-2.0 license

use anyhow::Result;

pub(crate) fn precheckin() -> Result<()> {
    crate::cargo::lock_check()?;
    crate::cargo::format()?;
    crate::clippy::clippy()?;
    crate::header::check()?;
    crate::test::check_target()
}
