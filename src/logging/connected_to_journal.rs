use std::{env, io, os::fd::AsFd as _};

/// Device and inode of the stream listed in `$JOURNAL_STREAM` (see `systemd.exec(5)`).
fn journal_stream() -> Option<(u64, u64)> {
    let stream = env::var("JOURNAL_STREAM").ok()?;
    let (device, inode) = stream.split_once(':')?;

    Some((device.parse().ok()?, inode.parse().ok()?))
}

/// Whether stderr of the current process is directly connected to the systemd journal.
pub fn connected_to_journal() -> bool {
    let Some(journal) = journal_stream() else {
        return false;
    };

    rustix::fs::fstat(io::stderr().as_fd())
        .is_ok_and(|stat| (stat.st_dev, stat.st_ino) == journal)
}
