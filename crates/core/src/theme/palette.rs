use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Style slots handed to the renderer. The engine never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePalette {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_bg: Option<Cow<'static, str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_border: Option<Cow<'static, str>>,
    pub selected_bg: Cow<'static, str>,
    pub selected_text: Cow<'static, str>,
    pub today_bg: Cow<'static, str>,
    pub today_text: Cow<'static, str>,
    pub normal_text: Cow<'static, str>,
    pub normal_hover_bg: Cow<'static, str>,
    pub disabled_bg: Cow<'static, str>,
    pub disabled_text: Cow<'static, str>,
    pub border_radius: Cow<'static, str>,
}

const fn s(value: &'static str) -> Cow<'static, str> {
    Cow::Borrowed(value)
}

/// Default palette, used for unknown theme names.
pub const LIGHT: ThemePalette = ThemePalette {
    container_bg: Some(s("bg-white")),
    container_border: Some(s("border border-gray-100")),
    selected_bg: s("bg-blue-600"),
    selected_text: s("text-white"),
    today_bg: s("bg-blue-100"),
    today_text: s("text-blue-600"),
    normal_text: s("text-gray-700"),
    normal_hover_bg: s("hover:bg-gray-200"),
    disabled_bg: s("bg-gray-100"),
    disabled_text: s("text-gray-400"),
    border_radius: s("rounded-xl"),
};

pub const DARK: ThemePalette = ThemePalette {
    container_bg: Some(s("bg-gray-900")),
    container_border: Some(s("border border-gray-700")),
    selected_bg: s("bg-indigo-500"),
    selected_text: s("text-white"),
    today_bg: s("bg-gray-700"),
    today_text: s("text-indigo-300"),
    normal_text: s("text-gray-200"),
    normal_hover_bg: s("hover:bg-gray-800"),
    disabled_bg: s("bg-gray-800"),
    disabled_text: s("text-gray-600"),
    border_radius: s("rounded-xl"),
};

pub const METALLIC: ThemePalette = ThemePalette {
    container_bg: Some(s("bg-gradient-to-br from-gray-200 via-gray-300 to-gray-400")),
    container_border: Some(s("border border-gray-500")),
    selected_bg: s("bg-gray-700"),
    selected_text: s("text-gray-100"),
    today_bg: s("bg-gray-400"),
    today_text: s("text-gray-900"),
    normal_text: s("text-gray-800"),
    normal_hover_bg: s("hover:bg-gray-300"),
    disabled_bg: s("bg-gray-200"),
    disabled_text: s("text-gray-400"),
    border_radius: s("rounded-md"),
};

pub const CYBERPUNK: ThemePalette = ThemePalette {
    container_bg: Some(s("bg-black")),
    container_border: Some(s("border border-fuchsia-500")),
    selected_bg: s("bg-fuchsia-600"),
    selected_text: s("text-yellow-300"),
    today_bg: s("bg-cyan-900"),
    today_text: s("text-cyan-300"),
    normal_text: s("text-cyan-200"),
    normal_hover_bg: s("hover:bg-fuchsia-950"),
    disabled_bg: s("bg-gray-950"),
    disabled_text: s("text-gray-700"),
    border_radius: s("rounded-none"),
};

pub const RETRO: ThemePalette = ThemePalette {
    container_bg: Some(s("bg-amber-50")),
    container_border: Some(s("border-2 border-amber-900")),
    selected_bg: s("bg-orange-600"),
    selected_text: s("text-amber-50"),
    today_bg: s("bg-yellow-200"),
    today_text: s("text-amber-900"),
    normal_text: s("text-amber-900"),
    normal_hover_bg: s("hover:bg-amber-100"),
    disabled_bg: s("bg-amber-100"),
    disabled_text: s("text-amber-300"),
    border_radius: s("rounded-sm"),
};

pub const NATURE: ThemePalette = ThemePalette {
    container_bg: Some(s("bg-gradient-to-br from-green-50 to-emerald-100")),
    container_border: Some(s("border border-emerald-200")),
    selected_bg: s("bg-emerald-600"),
    selected_text: s("text-white"),
    today_bg: s("bg-lime-200"),
    today_text: s("text-emerald-900"),
    normal_text: s("text-emerald-800"),
    normal_hover_bg: s("hover:bg-emerald-50"),
    disabled_bg: s("bg-emerald-50"),
    disabled_text: s("text-emerald-200"),
    border_radius: s("rounded-full"),
};

#[allow(clippy::too_many_arguments)]
const fn seasonal(
    container_bg: &'static str,
    container_border: &'static str,
    selected_bg: &'static str,
    today_bg: &'static str,
    today_text: &'static str,
    normal_text: &'static str,
    normal_hover_bg: &'static str,
    disabled_bg: &'static str,
    disabled_text: &'static str,
) -> ThemePalette {
    ThemePalette {
        container_bg: Some(s(container_bg)),
        container_border: Some(s(container_border)),
        selected_bg: s(selected_bg),
        selected_text: s("text-white"),
        today_bg: s(today_bg),
        today_text: s(today_text),
        normal_text: s(normal_text),
        normal_hover_bg: s(normal_hover_bg),
        disabled_bg: s(disabled_bg),
        disabled_text: s(disabled_text),
        border_radius: s("rounded-xl"),
    }
}

/// Month-varying palettes indexed by month, 0 = January.
///
/// Winter (Nov-Jan) is pale and cold, spring (Feb-Apr) pastel, summer
/// (May-Jun) saturated, the monsoon (Jul-Aug) cloudy and autumn (Sep-Oct)
/// earthy.
pub const SEASONAL: [ThemePalette; 12] = [
    // Deep winter
    seasonal(
        "bg-gradient-to-br from-slate-100 via-blue-100 to-slate-200",
        "border border-slate-300",
        "bg-blue-500",
        "bg-blue-200",
        "text-slate-900",
        "text-slate-700",
        "hover:bg-blue-50",
        "bg-slate-50",
        "text-slate-300",
    ),
    // Late winter
    seasonal(
        "bg-gradient-to-br from-blue-50 via-emerald-50 to-lime-100",
        "border border-emerald-200",
        "bg-emerald-500",
        "bg-lime-200",
        "text-emerald-900",
        "text-emerald-800",
        "hover:bg-emerald-50",
        "bg-emerald-50",
        "text-emerald-200",
    ),
    // Bloom
    seasonal(
        "bg-gradient-to-br from-rose-50 via-pink-100 to-green-100",
        "border border-pink-200",
        "bg-pink-500",
        "bg-rose-200",
        "text-rose-900",
        "text-rose-800",
        "hover:bg-pink-50",
        "bg-rose-50",
        "text-rose-200",
    ),
    // Full spring
    seasonal(
        "bg-gradient-to-br from-green-50 via-lime-100 to-yellow-100",
        "border border-lime-300",
        "bg-lime-600",
        "bg-yellow-200",
        "text-lime-900",
        "text-lime-800",
        "hover:bg-lime-50",
        "bg-lime-50",
        "text-lime-200",
    ),
    // Rising heat
    seasonal(
        "bg-gradient-to-br from-yellow-100 via-orange-200 to-amber-300",
        "border border-amber-400",
        "bg-orange-500",
        "bg-yellow-300",
        "text-orange-900",
        "text-orange-900",
        "hover:bg-orange-100",
        "bg-orange-50",
        "text-orange-200",
    ),
    // Peak summer
    seasonal(
        "bg-gradient-to-br from-orange-300 via-red-300 to-yellow-300",
        "border border-red-500",
        "bg-red-600",
        "bg-orange-400",
        "text-white",
        "text-red-900",
        "hover:bg-red-100",
        "bg-red-50",
        "text-red-200",
    ),
    // Monsoon
    seasonal(
        "bg-gradient-to-br from-slate-300 via-blue-300 to-indigo-400",
        "border border-indigo-500",
        "bg-indigo-700",
        "bg-blue-400",
        "text-white",
        "text-slate-900",
        "hover:bg-blue-100",
        "bg-slate-100",
        "text-slate-400",
    ),
    // Lush rain
    seasonal(
        "bg-gradient-to-br from-emerald-300 via-teal-300 to-slate-400",
        "border border-teal-600",
        "bg-teal-700",
        "bg-emerald-400",
        "text-white",
        "text-slate-900",
        "hover:bg-teal-100",
        "bg-teal-50",
        "text-teal-300",
    ),
    // Soft autumn
    seasonal(
        "bg-gradient-to-br from-yellow-200 via-amber-300 to-orange-300",
        "border border-amber-500",
        "bg-amber-600",
        "bg-yellow-400",
        "text-amber-900",
        "text-amber-900",
        "hover:bg-amber-100",
        "bg-amber-50",
        "text-amber-200",
    ),
    // Deep autumn
    seasonal(
        "bg-gradient-to-br from-orange-400 via-red-400 to-amber-500",
        "border border-orange-700",
        "bg-red-700",
        "bg-orange-500",
        "text-white",
        "text-amber-950",
        "hover:bg-orange-200",
        "bg-orange-50",
        "text-orange-300",
    ),
    // Early winter
    seasonal(
        "bg-gradient-to-br from-slate-200 via-blue-200 to-gray-300",
        "border border-slate-400",
        "bg-slate-700",
        "bg-blue-300",
        "text-slate-900",
        "text-slate-700",
        "hover:bg-slate-100",
        "bg-slate-50",
        "text-slate-300",
    ),
    // Coldest
    seasonal(
        "bg-gradient-to-br from-cyan-100 via-blue-200 to-indigo-300",
        "border border-cyan-500",
        "bg-blue-800",
        "bg-cyan-300",
        "text-white",
        "text-slate-800",
        "hover:bg-cyan-100",
        "bg-cyan-50",
        "text-cyan-300",
    ),
];
