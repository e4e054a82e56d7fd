use embassy_time::Duration;

/// Low time of `RESET_N` pin to trigger module reset (reboot)
pub fn reset_time() -> Duration {
    Duration::from_millis(100)
}

/// Time to wait for module to boot after `RESET_N` is released
pub fn boot_time() -> Duration {
    Duration::from_secs(3)
}
