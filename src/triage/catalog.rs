//! Localized advice text: triage-level messages, generic tips and
//! symptom-specific tips.

use super::classifier::TriageLevel;
use super::dictionary::SymptomId;
use super::language::{Language, Localized};

type Text = Localized<&'static str>;
type Tips = Localized<&'static [&'static str]>;

static EMERGENCY_MESSAGE: Text = Localized {
    en: "⚠️ Your symptoms appear serious. Please seek emergency medical care immediately (ER / 112).",
    hi: "⚠️ आपके लक्षण गंभीर लग रहे हैं। कृपया तुरंत आपातकालीन चिकित्सा सहायता लें (ER / 112)।",
    bn: "⚠️ আপনার উপসর্গগুলো গুরুতর মনে হচ্ছে। দয়া করে অবিলম্বে জরুরি চিকিৎসা নিন (ER / 112)।",
};

static URGENT_MESSAGE: Text = Localized {
    en: "Your condition may need a doctor within 24 hours.",
    hi: "आपकी स्थिति को 24 घंटे के भीतर डॉक्टर की जरूरत हो सकती है।",
    bn: "আপনার অবস্থার জন্য ২৪ ঘণ্টার মধ্যে ডাক্তার দেখানো দরকার হতে পারে।",
};

static HOME_MESSAGE: Text = Localized {
    en: "You can start with home care and monitor for 48 hours.",
    hi: "आप घर पर देखभाल से शुरुआत कर सकते हैं और 48 घंटे तक नज़र रखें।",
    bn: "আপনি বাড়িতে প্রাথমিক যত্ন শুরু করতে পারেন এবং ৪৮ ঘণ্টা পর্যবেক্ষণ করুন।",
};

/// Headline message for a triage level.
pub fn triage_message(level: TriageLevel, lang: Language) -> &'static str {
    let table = match level {
        TriageLevel::Emergency => &EMERGENCY_MESSAGE,
        TriageLevel::Urgent => &URGENT_MESSAGE,
        TriageLevel::Home => &HOME_MESSAGE,
    };
    *table.get(lang)
}

/// Supportive advice not tied to one symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericTip {
    Hydrate,
    Rest,
    Paracetamol,
    Ors,
    HoneyTea,
    Saline,
    SeeDoctor,
}

impl GenericTip {
    pub fn text(self, lang: Language) -> &'static str {
        let table: &Text = match self {
            Self::Hydrate => &Localized {
                en: "Stay well hydrated.",
                hi: "पानी पर्याप्त मात्रा में पिएँ।",
                bn: "পর্যাপ্ত পানি পান করুন।",
            },
            Self::Rest => &Localized {
                en: "Get adequate rest and sleep.",
                hi: "पर्याप्त आराम और नींद लें।",
                bn: "যথেষ্ট বিশ্রাম ও ঘুম নিন।",
            },
            Self::Paracetamol => &Localized {
                en: "You may take paracetamol for fever/pain (as per label).",
                hi: "बुखार/दर्द के लिए पैरासिटामोल ले सकते हैं (निर्देशानुसार)।",
                bn: "জ্বর/ব্যথার জন্য প্যারাসিটামল নিতে পারেন (নির্দেশনা অনুযায়ী)।",
            },
            Self::Ors => &Localized {
                en: "Use oral rehydration salts (ORS) for dehydration/diarrhea.",
                hi: "डिहाइड्रेशन/दस्त के लिए ORS का उपयोग करें।",
                bn: "ডিহাইড্রেশন/ডায়রিয়ায় ORS ব্যবহার করুন।",
            },
            Self::HoneyTea => &Localized {
                en: "Warm fluids like honey-ginger tea can soothe cough.",
                hi: "शहद-अदरक की चाय जैसी गर्म तरल खांसी में आराम देती है।",
                bn: "মধু-আদার চা মতো গরম পানীয় কাশি উপশমে সাহায্য করে।",
            },
            Self::Saline => &Localized {
                en: "Steam inhalation or saline gargles may help.",
                hi: "भाप लेना या नमक के पानी से गरारे मददगार हो सकते हैं।",
                bn: "ভাপ নেয়া বা নুন-জলে গার্গল উপকারী হতে পারে।",
            },
            Self::SeeDoctor => &Localized {
                en: "If symptoms persist/worsen, see a doctor.",
                hi: "लक्षण बने रहें/बढ़ें तो डॉक्टर से मिलें।",
                bn: "লক্ষণ স্থায়ী হলে/বাড়লে ডাক্তার দেখান।",
            },
        };
        *table.get(lang)
    }
}

/// Tips shown when `id` is detected, in display order.
pub fn symptom_tips(id: SymptomId, lang: Language) -> &'static [&'static str] {
    let table: &Tips = match id {
        SymptomId::Fever => &Localized {
            en: &[
                "Monitor temperature every 6–8 hours.",
                "Light clothing; sponge with lukewarm water if high fever.",
            ],
            hi: &[
                "हर 6–8 घंटे में तापमान देखें।",
                "हल्के कपड़े पहनें; तेज बुखार में गुनगुने पानी से स्पंज करें।",
            ],
            bn: &[
                "প্রতি ৬–৮ ঘণ্টায় তাপমাত্রা মাপুন।",
                "হালকা পোশাক; বেশি জ্বর হলে কুসুম গরম পানিতে স্পঞ্জ করুন।",
            ],
        },
        SymptomId::Cough => &Localized {
            en: &["Avoid smoke/dust exposure.", "Consider throat lozenges."],
            hi: &["धुएँ/धूल से बचें।", "गले की गोली का उपयोग कर सकते हैं।"],
            bn: &["ধোঁয়া/ধূলা এড়িয়ে চলুন।", "গলার লজেন্স ব্যবহার করতে পারেন।"],
        },
        SymptomId::SoreThroat => &Localized {
            en: &["Gargle with warm saline water twice daily."],
            hi: &["दिन में दो बार गुनगुने नमक पानी से गरारे करें।"],
            bn: &["দিনে দু’বার কুসুম গরম নুন-জলে গার্গল করুন।"],
        },
        SymptomId::Cold => &Localized {
            en: &["Steam inhalation helps with nasal blockage."],
            hi: &["भाप लेना नाक बंद में लाभदायक है।"],
            bn: &["নাক বন্ধ থাকলে ভাপ নেয়া উপকারী।"],
        },
        SymptomId::Headache => &Localized {
            en: &["Limit screen time and rest your eyes."],
            hi: &["स्क्रीन टाइम कम करें और आँखों को आराम दें।"],
            bn: &["স্ক্রিন-টাইম কমান, চোখকে বিশ্রাম দিন।"],
        },
        SymptomId::Nausea => &Localized {
            en: &["Eat small, bland meals."],
            hi: &["थोड़ा-थोड़ा और सादा भोजन करें।"],
            bn: &["অল্প অল্প করে সাদাভাবে খাবার খান।"],
        },
        SymptomId::Vomiting => &Localized {
            en: &["Sip fluids frequently to avoid dehydration."],
            hi: &["डिहाइड्रेशन से बचने के लिए थोड़ी-थोड़ी मात्रा में तरल लें।"],
            bn: &["ডিহাইড্রেশন এড়াতে অল্প অল্প করে তরল পান করুন।"],
        },
        SymptomId::Diarrhea => &Localized {
            en: &["Avoid raw/milky/spicy foods for 24–48 hours."],
            hi: &["24–48 घंटे तक कच्चा/दूधीय/मसालेदार भोजन न लें।"],
            bn: &["২৪–৪৮ ঘণ্টা কাঁচা/দুধজাত/ঝাল খাবার এড়িয়ে চলুন।"],
        },
        SymptomId::Dizziness => &Localized {
            en: &["Sit/lie down until the feeling passes; rise slowly."],
            hi: &["चक्कर आने पर बैठें/लेटें; धीरे-धीरे उठें।"],
            bn: &["মাথা ঘোরালে বসুন/শুয়ে পড়ুন; ধীরে ধীরে উঠুন।"],
        },
        SymptomId::ChestPain => &Localized {
            en: &["Do not exert yourself; arrange emergency evaluation."],
            hi: &["मेहनत वाले कार्य न करें; आपात जाँच की व्यवस्था करें।"],
            bn: &["শরীরচর্চা/শ্রম করবেন না; জরুরি পরীক্ষা করুন।"],
        },
        SymptomId::ShortBreath => &Localized {
            en: &["Sit upright; avoid lying flat; seek urgent care."],
            hi: &["सीधे बैठें; सीधा लेटने से बचें; तुरंत चिकित्सा लें।"],
            bn: &["সোজা হয়ে বসুন; সোজা শুতে যাবেন না; দ্রুত চিকিৎসা নিন।"],
        },
        SymptomId::Seizure => &Localized {
            en: &["Protect from injury, turn to side, time the seizure."],
            hi: &["चोट से बचाएँ, करवट करवट करें, दौरे का समय नोट करें।"],
            bn: &["আঘাত থেকে বাঁচান, কাত করে দিন, খিঁচুনির সময় নোট করুন।"],
        },
        SymptomId::Unconscious => &Localized {
            en: &["Check breathing; call emergency services."],
            hi: &["सांस जाँचें; आपातकालीन सेवा को कॉल करें।"],
            bn: &["শ্বাস চলছে কি না দেখুন; জরুরি সেবায় ফোন করুন।"],
        },
    };
    *table.get(lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::dictionary::SYMPTOMS;

    const ALL_TIPS: [GenericTip; 7] = [
        GenericTip::Hydrate,
        GenericTip::Rest,
        GenericTip::Paracetamol,
        GenericTip::Ors,
        GenericTip::HoneyTea,
        GenericTip::Saline,
        GenericTip::SeeDoctor,
    ];

    #[test]
    fn every_symptom_has_tips_in_every_language() {
        for def in SYMPTOMS {
            for lang in Language::SUPPORTED {
                assert!(
                    !symptom_tips(def.id, lang).is_empty(),
                    "missing {lang} tips for {}",
                    def.id
                );
            }
        }
    }

    #[test]
    fn generic_tips_are_distinct_within_a_language() {
        for lang in Language::SUPPORTED {
            let texts: std::collections::HashSet<_> =
                ALL_TIPS.iter().map(|t| t.text(lang)).collect();
            assert_eq!(texts.len(), ALL_TIPS.len());
        }
    }

    #[test]
    fn triage_messages_are_localized() {
        assert!(triage_message(TriageLevel::Emergency, Language::En).contains("112"));
        assert_ne!(
            triage_message(TriageLevel::Home, Language::En),
            triage_message(TriageLevel::Home, Language::Hi)
        );
        assert_ne!(
            triage_message(TriageLevel::Urgent, Language::Hi),
            triage_message(TriageLevel::Urgent, Language::Bn)
        );
    }

    #[test]
    fn urdu_falls_back_to_english_text() {
        assert_eq!(
            triage_message(TriageLevel::Urgent, Language::Ur),
            triage_message(TriageLevel::Urgent, Language::En)
        );
        assert_eq!(
            GenericTip::Rest.text(Language::Ur),
            "Get adequate rest and sleep."
        );
        assert_eq!(
            symptom_tips(SymptomId::Cold, Language::Ur),
            symptom_tips(SymptomId::Cold, Language::En)
        );
    }
}
