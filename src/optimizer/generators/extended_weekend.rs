//! Extended weekend candidates.
//!
//! For every weekend of the year, a Thursday→Sunday and a Friday→Monday
//! window anchored on the Saturday. Normally two PTO days buy four days
//! off; fewer when a holiday lands inside the window.

use chrono::{Datelike, Duration, Weekday};

use crate::models::{Period, PeriodKind};

use super::GeneratorContext;

/// Enumerates Thu→Sun and Fri→Mon windows around every Saturday in the
/// planning window.
pub fn generate(ctx: &GeneratorContext) -> Vec<Period> {
    let mut candidates = Vec::new();

    let mut current = ctx.window_start();
    let end = ctx.window_end();
    while current <= end {
        if current.weekday() == Weekday::Sat {
            let saturday = current;
            // Thursday through Sunday
            candidates.push(ctx.period(
                saturday - Duration::days(2),
                saturday + Duration::days(1),
                PeriodKind::ExtendedWeekend,
            ));
            // Friday through Monday
            candidates.push(ctx.period(
                saturday - Duration::days(1),
                saturday + Duration::days(2),
                PeriodKind::ExtendedWeekend,
            ));
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    candidates
}
