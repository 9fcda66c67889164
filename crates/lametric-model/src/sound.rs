//! Notification sounds.
//!
//! The device ships two catalogs: alarms and notification sounds. A sound is
//! sent as `{"id": <catalog key>, "repeat": <n>, "category": <catalog>}`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ModelError;

/// Category name of the alarm catalog.
pub const CATEGORY_ALARMS: &str = "alarms";

/// Category name of the notification catalog.
pub const CATEGORY_NOTIFICATIONS: &str = "notifications";

macro_rules! catalog {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $id:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $id, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Every entry of the catalog.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Catalog key sent to the device.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $id,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id => Ok($name::$variant),)+
                    _ => Err(ModelError::UnknownSound(s.to_string())),
                }
            }
        }
    };
}

catalog! {
    /// Entries of the `alarms` catalog.
    AlarmSound {
        Alarm1 => "alarm1",
        Alarm2 => "alarm2",
        Alarm3 => "alarm3",
        Alarm4 => "alarm4",
        Alarm5 => "alarm5",
        Alarm6 => "alarm6",
        Alarm7 => "alarm7",
        Alarm8 => "alarm8",
        Alarm9 => "alarm9",
        Alarm10 => "alarm10",
        Alarm11 => "alarm11",
        Alarm12 => "alarm12",
        Alarm13 => "alarm13",
    }
}

catalog! {
    /// Entries of the `notifications` catalog.
    NoticeSound {
        Bicycle => "bicycle",
        Car => "car",
        Cash => "cash",
        Cat => "cat",
        Dog => "dog",
        Dog2 => "dog2",
        Energy => "energy",
        KnockKnock => "knock-knock",
        LetterEmail => "letter_email",
        Lose1 => "lose1",
        Lose2 => "lose2",
        Negative1 => "negative1",
        Negative2 => "negative2",
        Negative3 => "negative3",
        Negative4 => "negative4",
        Negative5 => "negative5",
        Notification => "notification",
        Notification2 => "notification2",
        Notification3 => "notification3",
        Notification4 => "notification4",
        OpenDoor => "open_door",
        Positive1 => "positive1",
        Positive2 => "positive2",
        Positive3 => "positive3",
        Positive4 => "positive4",
        Positive5 => "positive5",
        Positive6 => "positive6",
        Statistic => "statistic",
        Thunder => "thunder",
        Water1 => "water1",
        Water2 => "water2",
        Win => "win",
        Win2 => "win2",
        Wind => "wind",
        WindShort => "wind_short",
    }
}

/// A sound played when the notification appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// An alarm sound.
    Alarm {
        /// Catalog entry.
        sound: AlarmSound,
        /// Times to play; 0 loops until dismissed.
        repeat: u32,
    },
    /// A short notification sound.
    Notice {
        /// Catalog entry.
        sound: NoticeSound,
        /// Times to play; 0 loops until dismissed.
        repeat: u32,
    },
}

impl Sound {
    /// Play an alarm once.
    pub fn alarm(sound: AlarmSound) -> Self {
        Sound::Alarm { sound, repeat: 1 }
    }

    /// Play a notification sound once.
    pub fn notice(sound: NoticeSound) -> Self {
        Sound::Notice { sound, repeat: 1 }
    }

    /// Replace the repeat count. 0 loops until the notification is dismissed.
    pub fn with_repeat(self, repeat: u32) -> Self {
        match self {
            Sound::Alarm { sound, .. } => Sound::Alarm { sound, repeat },
            Sound::Notice { sound, .. } => Sound::Notice { sound, repeat },
        }
    }

    /// Catalog key.
    pub fn id(&self) -> &'static str {
        match self {
            Sound::Alarm { sound, .. } => sound.as_str(),
            Sound::Notice { sound, .. } => sound.as_str(),
        }
    }

    /// Repeat count.
    pub fn repeat(&self) -> u32 {
        match self {
            Sound::Alarm { repeat, .. } | Sound::Notice { repeat, .. } => *repeat,
        }
    }

    /// Catalog name sent as `category`.
    pub fn category(&self) -> &'static str {
        match self {
            Sound::Alarm { .. } => CATEGORY_ALARMS,
            Sound::Notice { .. } => CATEGORY_NOTIFICATIONS,
        }
    }
}

#[derive(Serialize)]
struct WireSound {
    id: &'static str,
    repeat: u32,
    category: &'static str,
}

impl Serialize for Sound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireSound {
            id: self.id(),
            repeat: self.repeat(),
            category: self.category(),
        }
        .serialize(serializer)
    }
}
