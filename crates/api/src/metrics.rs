//! Process-wide attendance counters.
//!
//! A best-effort side channel: handlers bump a counter after the
//! response-determining result is already computed, so metrics can never
//! alter the outcome of a request. The counters are lock-free atomics,
//! monotonic for the process lifetime, and are rendered in Prometheus text
//! exposition format by the `/metrics` route.

use std::sync::atomic::{AtomicU64, Ordering};

use rollcall_core::attendance::AttendanceStatus;

/// Monotonic per-status counters for recorded attendance events.
#[derive(Debug, Default)]
pub struct AttendanceCounters {
    present: AtomicU64,
    absent: AtomicU64,
}

impl AttendanceCounters {
    /// Count one recorded attendance event, labeled by resulting status.
    pub fn record(&self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present.fetch_add(1, Ordering::Relaxed),
            AttendanceStatus::Absent => self.absent.fetch_add(1, Ordering::Relaxed),
        };
    }

    /// Current value of the counter for a status.
    pub fn get(&self, status: AttendanceStatus) -> u64 {
        match status {
            AttendanceStatus::Present => self.present.load(Ordering::Relaxed),
            AttendanceStatus::Absent => self.absent.load(Ordering::Relaxed),
        }
    }

    /// Render all counters in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(
            "# HELP attendance_marked_total Attendance records written, by resulting status.\n",
        );
        out.push_str("# TYPE attendance_marked_total counter\n");
        for status in [AttendanceStatus::Present, AttendanceStatus::Absent] {
            out.push_str(&format!(
                "attendance_marked_total{{status=\"{}\"}} {}\n",
                status,
                self.get(status)
            ));
        }
        out
    }
}
