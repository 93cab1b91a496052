//! Classification of `service` command output

use std::collections::BTreeSet;

/// Phrases Upstart and SysV scripts print for a running service
const RUNNING_MARKERS: [&str; 3] = ["start/running", "is running", "up and running"];

/// Marker `service --status-all` prints in front of running services
const STATUS_TABLE_RUNNING: &str = "[ + ]";

const UNRECOGNIZED_SERVICE: &str = "unrecognized service";

/// True if `service <name> status` output reports the service as running
pub fn reports_running(output: &str) -> bool {
    RUNNING_MARKERS.iter().any(|marker| output.contains(marker))
}

/// Names of running services in `service --status-all` output
pub fn parse_status_table(output: &str) -> BTreeSet<String> {
    output
        .lines()
        .filter(|line| line.contains(STATUS_TABLE_RUNNING))
        .filter_map(|line| line.split_whitespace().last())
        .map(str::to_string)
        .collect()
}

/// True if a failed status call says the service does not exist
pub fn is_unrecognized(output: &str) -> bool {
    output.contains(UNRECOGNIZED_SERVICE)
}
