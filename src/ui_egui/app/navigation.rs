use super::SchedulerApp;
use chrono::{Datelike, NaiveDate};

impl SchedulerApp {
    /// Header arrows: move the week start by one day.
    pub(super) fn shift_week_start(&mut self, days: i64) {
        let start = self.week.shift_day(days);
        self.calendar_month = start;
    }

    /// Mini calendar click. The week view answers with the containing week
    /// on its next frame, even when the same date is clicked again.
    pub(super) fn select_date(&mut self, date: NaiveDate) {
        log::debug!("Selected {} in mini calendar", date);
        self.selected_date = Some(date);
        self.calendar_month = date;
        self.week_view_state.request_jump(date);
    }

    pub(super) fn shift_calendar_month(&mut self, delta_months: i32) {
        self.calendar_month = shift_month_preserving_day(self.calendar_month, delta_months);
    }

    pub(super) fn set_use_24_hour(&mut self, use_24_hour: bool) {
        if self.settings.use_24_hour == use_24_hour {
            return;
        }
        self.settings.use_24_hour = use_24_hour;
        log::info!(
            "Switched to {} clock",
            if use_24_hour { "24-hour" } else { "12-hour" }
        );
        self.persist_settings();
    }
}

fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    (1..=current.day())
        .rev()
        .find_map(|day| NaiveDate::from_ymd_opt(new_year, new_month, day))
        .unwrap_or(current)
}
