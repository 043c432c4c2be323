use std::io::Write;

use anyhow::Result;
use log::info;

use crate::contact::{ContactNameProvider, ContactRepository, RealContactNameProvider};

pub fn run(contacts: &impl ContactRepository, address: &str, out: &mut impl Write) -> Result<()> {
    let provider = RealContactNameProvider::new(contacts);
    if let Some(name) = provider.name_for_address(address) {
        writeln!(out, "{name}")?;
    } else {
        info!("no name known for {address}");
    }

    Ok(())
}
