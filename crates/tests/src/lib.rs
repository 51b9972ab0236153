#[cfg(test)]
mod common;

#[cfg(test)]
mod agenda_fetch_tests;

#[cfg(test)]
mod cases_fetch_tests;

#[cfg(test)]
mod fallback_tests;

#[cfg(test)]
mod fetch_all_tests;

#[cfg(test)]
mod notification_fetch_tests;

#[cfg(test)]
mod profile_fetch_tests;

#[cfg(test)]
mod staff_fetch_tests;
