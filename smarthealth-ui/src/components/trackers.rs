//! Tracker Components
//!
//! The six per-metric widgets. They take no input from the dashboard and
//! show sample readings; [`TrackerView`] picks one by [`Tracker`].

use leptos::*;
use smarthealth::Tracker;

/// Mount the widget for `tracker`
#[component]
pub fn TrackerView(tracker: Tracker) -> impl IntoView {
    match tracker {
        Tracker::HeartRate => view! { <HeartRateMonitor /> }.into_view(),
        Tracker::Sleep => view! { <SleepTracker /> }.into_view(),
        Tracker::Bmi => view! { <BmiCalculator /> }.into_view(),
        Tracker::WaterIntake => view! { <WaterIntakeTracker /> }.into_view(),
        Tracker::Nutrition => view! { <NutritionTracker /> }.into_view(),
        Tracker::Workout => view! { <WorkoutTracker /> }.into_view(),
    }
}

/// Card frame shared by every tracker
#[component]
fn TrackerCard(tracker: Tracker, children: Children) -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow-sm p-6 border border-slate-200">
            <h2 class="text-lg font-semibold mb-4">{tracker.title()}</h2>
            {children()}
        </section>
    }
}

#[component]
fn HeartRateMonitor() -> impl IntoView {
    let readings: [(&str, u32); 5] = [
        ("06:00", 58),
        ("09:00", 72),
        ("12:00", 81),
        ("15:00", 76),
        ("18:00", 88),
    ];
    let max = readings.iter().map(|(_, bpm)| *bpm).max().unwrap_or(1);

    view! {
        <TrackerCard tracker=Tracker::HeartRate>
            <div class="flex items-baseline space-x-2">
                <span class="text-4xl font-bold text-red-500">"72"</span>
                <span class="text-slate-500">"bpm"</span>
            </div>
            <p class="text-sm text-slate-500 mt-1">"Resting: 62 bpm"</p>
            <div class="flex items-end space-x-2 h-24 mt-4">
                {readings.into_iter().map(|(time, bpm)| view! {
                    <div class="flex-1 flex flex-col items-center">
                        <div
                            class="w-full bg-red-400 rounded-t"
                            style=format!("height: {}%", bpm * 100 / max)
                        />
                        <span class="text-xs text-slate-400 mt-1">{time}</span>
                    </div>
                }).collect_view()}
            </div>
        </TrackerCard>
    }
}

#[component]
fn SleepTracker() -> impl IntoView {
    let stages = [("Deep", "1h 45m"), ("Light", "4h 10m"), ("REM", "1h 25m")];

    view! {
        <TrackerCard tracker=Tracker::Sleep>
            <div class="flex items-baseline space-x-2">
                <span class="text-4xl font-bold text-indigo-500">"7h 20m"</span>
                <span class="text-slate-500">"last night"</span>
            </div>
            <ul class="mt-4 space-y-2">
                {stages.into_iter().map(|(stage, duration)| view! {
                    <li class="flex justify-between text-sm">
                        <span class="text-slate-600">{stage}</span>
                        <span class="font-medium">{duration}</span>
                    </li>
                }).collect_view()}
            </ul>
        </TrackerCard>
    }
}

#[component]
fn BmiCalculator() -> impl IntoView {
    let (height_cm, set_height_cm) = create_signal(175.0_f64);
    let (weight_kg, set_weight_kg) = create_signal(68.2_f64);

    let bmi = create_memo(move |_| bmi_value(height_cm.get(), weight_kg.get()));

    view! {
        <TrackerCard tracker=Tracker::Bmi>
            <div class="grid grid-cols-2 gap-4">
                <label class="text-sm text-slate-500">
                    "Height (cm)"
                    <input
                        type="number"
                        prop:value=move || height_cm.get().to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse() {
                                set_height_cm.set(v);
                            }
                        }
                        class="w-full mt-1 rounded-lg px-3 py-2 border border-slate-300"
                    />
                </label>
                <label class="text-sm text-slate-500">
                    "Weight (kg)"
                    <input
                        type="number"
                        prop:value=move || weight_kg.get().to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse() {
                                set_weight_kg.set(v);
                            }
                        }
                        class="w-full mt-1 rounded-lg px-3 py-2 border border-slate-300"
                    />
                </label>
            </div>
            <div class="mt-4">
                {move || match bmi.get() {
                    Some(value) => view! {
                        <span class="text-3xl font-bold">{format!("{:.1}", value)}</span>
                        <span class="ml-2 text-slate-500">{bmi_category(value)}</span>
                    }.into_view(),
                    None => view! { <span class="text-slate-400">"Enter height and weight"</span> }.into_view(),
                }}
            </div>
        </TrackerCard>
    }
}

/// Body mass index, or `None` for non-positive inputs
fn bmi_value(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let meters = height_cm / 100.0;
    Some(weight_kg / (meters * meters))
}

fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

const WATER_GOAL: u32 = 8;

#[component]
fn WaterIntakeTracker() -> impl IntoView {
    let (glasses, set_glasses) = create_signal(5_u32);

    view! {
        <TrackerCard tracker=Tracker::WaterIntake>
            <div class="flex items-baseline space-x-2">
                <span class="text-4xl font-bold text-blue-500">{move || glasses.get()}</span>
                <span class="text-slate-500">{format!("of {} glasses", WATER_GOAL)}</span>
            </div>
            <div class="flex space-x-1 mt-4">
                {(1..=WATER_GOAL).map(|n| view! {
                    <div class=move || if n <= glasses.get() {
                        "flex-1 h-6 rounded bg-blue-400"
                    } else {
                        "flex-1 h-6 rounded bg-slate-200"
                    } />
                }).collect_view()}
            </div>
            <div class="flex space-x-2 mt-4">
                <button
                    on:click=move |_| set_glasses.update(|g| *g = g.saturating_sub(1))
                    class="px-3 py-1 rounded-lg bg-slate-100 hover:bg-slate-200"
                >
                    "−"
                </button>
                <button
                    on:click=move |_| set_glasses.update(|g| *g += 1)
                    class="px-3 py-1 rounded-lg bg-blue-600 hover:bg-blue-700 text-white"
                >
                    "+ Glass"
                </button>
            </div>
        </TrackerCard>
    }
}

#[component]
fn NutritionTracker() -> impl IntoView {
    let meals = [("Breakfast", 420), ("Lunch", 650), ("Dinner", 710)];
    let total: u32 = meals.iter().map(|(_, kcal)| kcal).sum();

    view! {
        <TrackerCard tracker=Tracker::Nutrition>
            <ul class="space-y-2">
                {meals.into_iter().map(|(meal, kcal)| view! {
                    <li class="flex justify-between text-sm">
                        <span class="text-slate-600">{meal}</span>
                        <span class="font-medium">{format!("{} kcal", kcal)}</span>
                    </li>
                }).collect_view()}
            </ul>
            <p class="mt-4 pt-3 border-t border-slate-200 font-semibold">
                {format!("Total: {} kcal", total)}
            </p>
        </TrackerCard>
    }
}

#[component]
fn WorkoutTracker() -> impl IntoView {
    let sessions = [
        ("Morning run", "30 min", "5.2 km"),
        ("Strength training", "45 min", "Upper body"),
        ("Yoga", "20 min", "Stretching"),
    ];

    view! {
        <TrackerCard tracker=Tracker::Workout>
            <ul class="space-y-3">
                {sessions.into_iter().map(|(name, duration, detail)| view! {
                    <li class="flex justify-between">
                        <div>
                            <p class="font-medium">{name}</p>
                            <p class="text-sm text-slate-500">{detail}</p>
                        </div>
                        <span class="text-sm text-slate-600">{duration}</span>
                    </li>
                }).collect_view()}
            </ul>
        </TrackerCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_value() {
        let bmi = bmi_value(175.0, 68.2).unwrap();
        assert!((bmi - 22.27).abs() < 0.01);
        assert_eq!(bmi_value(0.0, 70.0), None);
        assert_eq!(bmi_value(170.0, -1.0), None);
    }

    #[test]
    fn test_bmi_category() {
        assert_eq!(bmi_category(17.0), "Underweight");
        assert_eq!(bmi_category(22.3), "Normal");
        assert_eq!(bmi_category(27.5), "Overweight");
        assert_eq!(bmi_category(31.0), "Obese");
    }
}
