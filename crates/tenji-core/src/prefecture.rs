//! The closed set of Japanese prefectures used for location filtering.
//!
//! Prefecture matching in the filter pipeline is exact equality on this
//! enum, never fuzzy text comparison. The wire form is the official
//! Japanese name (`東京都`, `北海道`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for unrecognized prefecture names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown prefecture: {0}")]
pub struct UnknownPrefecture(pub String);

/// Generates the prefecture enum plus its string conversions.
macro_rules! define_prefectures {
    ($(($variant:ident, $name:literal)),+ $(,)?) => {
        /// A Japanese prefecture.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Prefecture {
            $($variant),+
        }

        impl Prefecture {
            /// All prefectures, in the conventional north-to-south order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The official Japanese name.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl FromStr for Prefecture {
            type Err = UnknownPrefecture;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(UnknownPrefecture(s.to_string())),
                }
            }
        }
    };
}

define_prefectures!(
    (Hokkaido, "北海道"),
    (Aomori, "青森県"),
    (Iwate, "岩手県"),
    (Miyagi, "宮城県"),
    (Akita, "秋田県"),
    (Yamagata, "山形県"),
    (Fukushima, "福島県"),
    (Ibaraki, "茨城県"),
    (Tochigi, "栃木県"),
    (Gunma, "群馬県"),
    (Saitama, "埼玉県"),
    (Chiba, "千葉県"),
    (Tokyo, "東京都"),
    (Kanagawa, "神奈川県"),
    (Niigata, "新潟県"),
    (Toyama, "富山県"),
    (Ishikawa, "石川県"),
    (Fukui, "福井県"),
    (Yamanashi, "山梨県"),
    (Nagano, "長野県"),
    (Gifu, "岐阜県"),
    (Shizuoka, "静岡県"),
    (Aichi, "愛知県"),
    (Mie, "三重県"),
    (Shiga, "滋賀県"),
    (Kyoto, "京都府"),
    (Osaka, "大阪府"),
    (Hyogo, "兵庫県"),
    (Nara, "奈良県"),
    (Wakayama, "和歌山県"),
    (Tottori, "鳥取県"),
    (Shimane, "島根県"),
    (Okayama, "岡山県"),
    (Hiroshima, "広島県"),
    (Yamaguchi, "山口県"),
    (Tokushima, "徳島県"),
    (Kagawa, "香川県"),
    (Ehime, "愛媛県"),
    (Kochi, "高知県"),
    (Fukuoka, "福岡県"),
    (Saga, "佐賀県"),
    (Nagasaki, "長崎県"),
    (Kumamoto, "熊本県"),
    (Oita, "大分県"),
    (Miyazaki, "宮崎県"),
    (Kagoshima, "鹿児島県"),
    (Okinawa, "沖縄県"),
);

impl fmt::Display for Prefecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Prefecture {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Prefecture {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
