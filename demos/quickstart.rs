use tempora::{easter, Boundary, CalendarPoint, Date, DateRange, DateTime, DateTimeError};

fn main() -> Result<(), DateTimeError> {
    let today = Date::today();
    let now = DateTime::now();

    println!("today: {today} ({:?}, weekend: {})", today.weekday(), today.is_weekend());
    println!("now: {now}");
    println!("JD: {}", now.canonical_instant().julian_day());

    let easter = easter::easter_sunday(today.year())?;
    let holidays = DateRange::from_points(
        Some(easter::good_friday(today.year())?),
        Some(easter::easter_monday(today.year())?),
        Boundary::Inclusive,
        Boundary::Inclusive,
    )?;
    println!("easter: {easter}, holidays: {holidays}");
    println!("today is an easter holiday: {}", holidays.contains(today));

    Ok(())
}
