use std::{io::Write, sync::Once};

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Initialize the logger for tests.
pub fn init_test_logger() {
    INIT.call_once(|| {
            Builder::new().filter_level(LevelFilter::Debug)
                          .format(|buf, record| {
                              writeln!(buf,
                                       "[{}] {}: {}",
                                       record.level(),
                                       record.target(),
                                       record.args())
                          })
                          .is_test(true)
                          .init();
        });
}
