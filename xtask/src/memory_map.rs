// Licensed under the Apache-2.0 license

use anyhow::{bail, Result};
use ux500_config::Ux500MemoryMap;

fn lookup(platform: Option<&str>) -> Result<Ux500MemoryMap> {
    match platform {
        None | Some("stemmy") => Ok(platform_stemmy::STEMMY_MEMORY_MAP),
        Some("u8500") => Ok(Ux500MemoryMap::default()),
        Some(other) => bail!("Unsupported platform {other:?}"),
    }
}

pub(crate) fn render(map: &Ux500MemoryMap) -> Vec<String> {
    let mut entries: Vec<_> = map.hash_map().into_iter().collect();
    entries.sort();
    entries
        .into_iter()
        .map(|(key, value)| format!("{key} = {value}"))
        .collect()
}

pub(crate) fn print(platform: Option<&str>) -> Result<()> {
    for line in render(&lookup(platform)?) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render_sorted() {
        let lines = render(&lookup(None).unwrap());
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "PRCMU_OFFSET = 0x80157000");
        assert!(lookup(Some("nhk15")).is_err());
    }
}
