// SPDX-License-Identifier: GPL-3.0-only

use chrono::{Local, NaiveDateTime};
use cosmic::iced::futures::SinkExt;
use cosmic::iced::{stream, Subscription};
use std::time::Duration;
use tracing::debug;

/// Current local wall-clock time, without timezone information.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Subscription that samples the local clock every `interval_seconds`
pub fn clock_subscription(interval_seconds: u32) -> Subscription<NaiveDateTime> {
    let interval = interval_seconds.max(1);

    Subscription::run_with_id(
        std::sync::Arc::new(("time-progress-clock", interval)),
        stream::channel(1, move |mut output| async move {
            let period = Duration::from_secs(u64::from(interval));
            loop {
                tokio::time::sleep(period).await;

                let now = local_now();
                debug!(%now, "clock tick");
                if output.send(now).await.is_err() {
                    break;
                }
            }
        }),
    )
}
