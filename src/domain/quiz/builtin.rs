//! The catalog shipped with the app.
//!
//! Fifteen base questions plus one conditional question for users who
//! selected the menstrual comfort goal. Weights are integers on a small
//! scale: 2 for a strong signal, 1 for a supporting signal.

use once_cell::sync::Lazy;

use super::{
    Axis, Catalog, CatalogDefinition, CatalogVersion, Goal, GoalPredicate, LifestyleBinding,
    LifestyleField, ModifierRule, Question, QuizOption, Section,
};

/// Current version of the built-in scoring scheme.
pub const BUILTIN_CATALOG_VERSION: u32 = 2;

/// Question whose answer is stored as the profile's alcohol frequency.
pub const ALCOHOL_QUESTION_ID: &str = "q14_alcohol";

/// Question whose answer is stored as the profile's smoking status.
pub const SMOKING_QUESTION_ID: &str = "q15_smoking";

/// Conditional question asked only for the menstrual comfort goal.
pub const MENSTRUAL_QUESTION_ID: &str = "q_menstrual_comfort";

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    // Validated by `builtin_catalog_is_valid`; a failure here is a code defect.
    Catalog::from_definition(builtin_definition()).expect("built-in catalog must be valid")
});

/// Returns the shared built-in catalog.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN
}

/// The raw definition behind [`builtin_catalog`].
pub fn builtin_definition() -> CatalogDefinition {
    use Axis::*;

    let questions = vec![
        Question::new(
            "q1_temperature",
            "When everyone else is comfortable, you usually feel…",
            Section::Temperature,
        )
        .option(QuizOption::new("cold", "Cold, I reach for a layer").weight(Cold, 2))
        .option(QuizOption::new("slightly_cool", "A little cool").weight(Cold, 1))
        .option(QuizOption::new("comfortable", "Comfortable too"))
        .option(QuizOption::new("slightly_warm", "A little warm").weight(Heat, 1))
        .option(QuizOption::new("hot", "Hot, I want a window open").weight(Heat, 2)),
        Question::new(
            "q2_hands_feet",
            "How are your hands and feet most days?",
            Section::Temperature,
        )
        .option(QuizOption::new("cold", "Cold to the touch").weight(Cold, 2))
        .option(QuizOption::new("normal", "Normal"))
        .option(QuizOption::new("warm", "Warm, sometimes hot").weight(Heat, 1))
        .option(
            QuizOption::new("clammy", "Clammy or sweaty")
                .weight(Heat, 1)
                .weight(Dampness, 1),
        ),
        Question::new(
            "q3_drinks",
            "Which drinks do you naturally reach for?",
            Section::Temperature,
        )
        .option(QuizOption::new("hot", "Hot tea or warm water").weight(Cold, 1))
        .option(QuizOption::new("room_temperature", "Whatever is around"))
        .option(QuizOption::new("iced", "Iced, always iced").weight(Heat, 2)),
        Question::new(
            "q4_energy",
            "How would you describe your everyday energy?",
            Section::Energy,
        )
        .option(QuizOption::new("steady", "Steady through the day"))
        .option(QuizOption::new("low", "Low from the moment I wake").weight(Depletion, 2))
        .option(
            QuizOption::new("wired_then_crash", "Wired, then I crash")
                .weight(Depletion, 1)
                .weight(Restlessness, 1),
        )
        .option(QuizOption::new("high", "High, hard to slow down").weight(Heat, 1)),
        Question::new("q5_after_meals", "How do you feel after a meal?", Section::Energy)
            .option(QuizOption::new("energized", "Refuelled"))
            .option(
                QuizOption::new("sleepy", "Sleepy and slow")
                    .weight(Depletion, 1)
                    .weight(Dampness, 1),
            )
            .option(QuizOption::new("bloated", "Bloated or heavy").weight(Dampness, 2))
            .option(QuizOption::new("hungry_soon", "Hungry again soon").weight(Heat, 1)),
        Question::new(
            "q6_digestion",
            "How does your digestion usually behave?",
            Section::Body,
        )
        .option(QuizOption::new("regular", "Regular and easy"))
        .option(
            QuizOption::new("loose", "Loose or urgent")
                .weight(Dampness, 1)
                .weight(Cold, 1),
        )
        .option(QuizOption::new("constipated", "Sluggish or dry").weight(Dryness, 2))
        .option(QuizOption::new("stress_dependent", "Depends on my stress").weight(Stagnation, 2)),
        Question::new("q7_body_feel", "Which best describes how your body feels?", Section::Body)
            .option(QuizOption::new("light", "Light and easy"))
            .option(QuizOption::new("heavy", "Heavy or puffy").weight(Dampness, 2))
            .option(QuizOption::new("dry", "Dry, parched").weight(Dryness, 2))
            .option(QuizOption::new("tense", "Tight shoulders and jaw").weight(Stagnation, 2)),
        Question::new("q8_skin", "How is your skin most of the time?", Section::Body)
            .option(QuizOption::new("balanced", "Balanced"))
            .option(QuizOption::new("dry", "Dry or flaky").weight(Dryness, 2))
            .option(
                QuizOption::new("oily", "Oily or congested")
                    .weight(Dampness, 1)
                    .weight(Heat, 1),
            )
            .option(QuizOption::new("red", "Red or easily irritated").weight(Heat, 2)),
        Question::new(
            MENSTRUAL_QUESTION_ID,
            "How do your cycles usually feel?",
            Section::Body,
        )
        .option(QuizOption::new("comfortable", "Mostly comfortable"))
        .option(
            QuizOption::new("cramps_eased_by_warmth", "Cramps that ease with warmth")
                .weight(Cold, 2)
                .weight(Stagnation, 1),
        )
        .option(
            QuizOption::new("heavy_or_long", "Heavy or long, leaves me drained")
                .weight(Depletion, 1)
                .weight(Dampness, 1),
        )
        .option(QuizOption::new("irritable_before", "Irritable and tense beforehand").weight(Stagnation, 2))
        .include_when(GoalPredicate::AnyOf(vec![Goal::MenstrualComfort])),
        Question::new("q9_cravings", "What do you crave most often?", Section::Cravings)
            .option(
                QuizOption::new("sweets", "Sweets and bread")
                    .weight(Dampness, 1)
                    .weight(Depletion, 1),
            )
            .option(QuizOption::new("warm_spicy", "Warm, spicy food").weight(Cold, 1))
            .option(QuizOption::new("cold_crunchy", "Cold, crunchy food").weight(Heat, 1))
            .option(QuizOption::new("salty", "Salty snacks").weight(Depletion, 1))
            .option(QuizOption::new("nothing", "Nothing in particular")),
        Question::new("q10_thirst", "How thirsty are you during the day?", Section::Body)
            .option(QuizOption::new("rarely", "Rarely thirsty").weight(Dampness, 1))
            .option(QuizOption::new("normal", "Normal"))
            .option(
                QuizOption::new("often", "Often, dry mouth")
                    .weight(Dryness, 1)
                    .weight(Heat, 1),
            ),
        Question::new("q11_stress", "When stress builds up, where does it go?", Section::Mind)
            .option(QuizOption::new("tension", "Into my body as tension").weight(Stagnation, 2))
            .option(QuizOption::new("racing_thoughts", "Racing thoughts").weight(Restlessness, 2))
            .option(QuizOption::new("exhaustion", "I run out of steam").weight(Depletion, 2))
            .option(
                QuizOption::new("irritability", "Short temper")
                    .weight(Heat, 1)
                    .weight(Stagnation, 1),
            )
            .option(QuizOption::new("roll_with_it", "I mostly roll with it")),
        Question::new("q12_sleep", "How do you usually sleep?", Section::Mind)
            .option(QuizOption::new("deep", "Deep and restful"))
            .option(QuizOption::new("hard_to_fall_asleep", "Hard to switch off").weight(Restlessness, 2))
            .option(
                QuizOption::new("wake_at_night", "I wake in the night, often warm")
                    .weight(Restlessness, 1)
                    .weight(Heat, 1),
            )
            .option(
                QuizOption::new("unrefreshed", "Long, but I wake unrefreshed")
                    .weight(Depletion, 1)
                    .weight(Dampness, 1),
            ),
        Question::new("q13_mood", "Which mood visits you most?", Section::Mind)
            .option(QuizOption::new("calm", "Calm"))
            .option(QuizOption::new("anxious", "Anxious or on edge").weight(Restlessness, 2))
            .option(QuizOption::new("frustrated", "Frustrated or stuck").weight(Stagnation, 2))
            .option(QuizOption::new("low", "Low or flat").weight(Depletion, 2)),
        Question::new(ALCOHOL_QUESTION_ID, "How often do you drink alcohol?", Section::Body)
            .option(QuizOption::new("never", "Never"))
            .option(QuizOption::new("occasionally", "Occasionally"))
            .option(
                QuizOption::new("weekly", "Most weeks")
                    .weight(Heat, 1)
                    .weight(Dampness, 1),
            )
            .option(
                QuizOption::new("daily", "Most days")
                    .weight(Heat, 2)
                    .weight(Dampness, 1),
            ),
        Question::new(SMOKING_QUESTION_ID, "Do you smoke or vape?", Section::Body)
            .option(QuizOption::new("never", "Never"))
            .option(QuizOption::new("former", "I used to"))
            .option(
                QuizOption::new("occasionally", "Occasionally")
                    .weight(Dryness, 1)
                    .weight(Heat, 1),
            )
            .option(
                QuizOption::new("daily", "Daily")
                    .weight(Dryness, 2)
                    .weight(Heat, 1),
            ),
    ];

    CatalogDefinition {
        version: CatalogVersion::new(BUILTIN_CATALOG_VERSION)
            .expect("built-in catalog version is non-zero"),
        axes: Axis::ALL.to_vec(),
        questions,
        modifier_rule: ModifierRule::default(),
        lifestyle: vec![
            LifestyleBinding {
                field: LifestyleField::AlcoholFrequency,
                question_id: ALCOHOL_QUESTION_ID.to_string(),
            },
            LifestyleBinding {
                field: LifestyleField::SmokingStatus,
                question_id: SMOKING_QUESTION_ID.to_string(),
            },
        ],
    }
}
