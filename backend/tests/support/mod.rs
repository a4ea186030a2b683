#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use disaster_dash::db::LocalRepository;
use disaster_dash::io::EventLoader;
use disaster_dash::services::DashboardSettings;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Small EM-DAT style export.
///
/// 2020 holds eight natural subtypes with deaths (one more than the default
/// ranking size), one technological event in Germany, and a storm in India
/// without any impact figures. 2099 lies in the future.
pub const FIXTURE_CSV: &str = "\
DisNo.,Historic,Disaster Group,Disaster Subgroup,Disaster Type,Disaster Subtype,Country,Region,Start Year,Total Deaths,Total Damage ('000 US$)
1985-0001-CHL,Yes,Natural,Geophysical,Earthquake,Ground movement,Chile,Americas,1985,177,1046000
1998-0002-PER,Yes,Natural,Hydrological,Flood,Riverine flood,Peru,Americas,1998,300,
2000-0003-CHL,No,Natural,Hydrological,Flood,Flash flood,Chile,Americas,2000,12,5000
2010-0004-CHL,No,Natural,Geophysical,Earthquake,Ground movement,Chile,Americas,2010,562,30000000
2020-0005-PER,No,Natural,Hydrological,Flood,Riverine flood,Peru,Americas,2020,20,1500
2020-0006-CHL,No,Natural,Climatological,Wildfire,Forest fire,Chile,Americas,2020,3,
2020-0007-DEU,No,Technological,Industrial accident,Industrial accident,Explosion (Industrial),Germany,Europe,2020,8,2000
2020-0008-IND,No,Natural,Meteorological,Storm,Tropical cyclone,India,Asia,2020,,
2099-0009-IND,No,Natural,Hydrological,Flood,Riverine flood,India,Asia,2099,40,100
2020-0010-JPN,No,Natural,Meteorological,Storm,Tropical cyclone,Japan,Asia,2020,90,8000
2020-0011-KEN,No,Natural,Climatological,Drought,Drought,Kenya,Africa,2020,5,
2020-0012-IND,No,Natural,Meteorological,Extreme temperature,Heat wave,India,Asia,2020,60,
2020-0013-NPL,No,Natural,Hydrological,Mass movement (wet),Landslide (wet),Nepal,Asia,2020,25,
2020-0014-IDN,No,Natural,Geophysical,Earthquake,Tsunami,Indonesia,Asia,2020,2,
2020-0015-USA,No,Natural,Meteorological,Extreme temperature,Cold wave,United States of America,Americas,2020,7,3000
";

/// Repository over [`FIXTURE_CSV`].
pub fn fixture_repository() -> LocalRepository {
    let events = EventLoader::load_csv_str(FIXTURE_CSV).expect("fixture CSV should parse");
    LocalRepository::new(events)
}

/// Write [`FIXTURE_CSV`] into `dir` and return its path.
pub fn write_fixture_csv(dir: &Path) -> PathBuf {
    let path = dir.join("emdat.csv");
    fs::write(&path, FIXTURE_CSV).expect("failed to write fixture CSV");
    path
}

/// Default settings with the clock pinned so that 2099 stays in the future.
pub fn fixed_settings() -> DashboardSettings {
    DashboardSettings {
        current_year: Some(2025),
        ..Default::default()
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * a.abs().max(b.abs()).max(1.0)
}
