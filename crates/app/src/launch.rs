use shared_types::Notification;

/// `view` value that deep-links into the new case form.
pub const NEW_CASE_VIEW: &str = "newcase";

/// Parameters the bot appends to the mini app URL.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaunchParams {
    pub view: Option<String>,
    pub broadcast: Option<String>,
    pub time: Option<String>,
}

/// Decode one form-urlencoded component. Malformed escapes leave the text
/// as it was.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Broadcast text arrives encoded twice by some senders; decode again while
/// escapes remain, keeping the once-decoded text if that fails.
fn decode_broadcast(raw: &str) -> String {
    let once = decode_component(raw);
    if !once.contains('%') {
        return once;
    }
    match urlencoding::decode(&once) {
        Ok(twice) => twice.into_owned(),
        Err(_) => once,
    }
}

impl LaunchParams {
    /// Parse a query string, with or without the leading `?`. The first
    /// occurrence of a key wins.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match decode_component(key).as_str() {
                "view" if params.view.is_none() => params.view = Some(decode_component(value)),
                "broadcast" if params.broadcast.is_none() => {
                    params.broadcast = Some(decode_broadcast(value))
                }
                "time" if params.time.is_none() => params.time = Some(decode_component(value)),
                _ => {}
            }
        }
        params
    }

    pub fn opens_new_case(&self) -> bool {
        self.view.as_deref() == Some(NEW_CASE_VIEW)
    }

    /// The broadcast as a notification, when one was passed.
    pub fn broadcast_notification(&self) -> Option<Notification> {
        self.broadcast
            .as_ref()
            .filter(|m| !m.is_empty())
            .map(|message| Notification::broadcast(message.clone(), self.time.clone()))
    }
}
