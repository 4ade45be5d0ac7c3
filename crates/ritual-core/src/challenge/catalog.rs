//! Built-in challenge content.

use std::sync::OnceLock;

use super::{Challenge, DayEntry, RitualType, Step};

pub const DEFAULT_CHALLENGE_ID: &str = "30-day-reset";

const HEADER_IMAGE: &str = "/header-image.jpg";
const IMG_CANDLE: &str =
    "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=300&h=200&fit=crop&crop=center";
const IMG_GLASS: &str =
    "https://images.unsplash.com/photo-1544148103-0773bf10d330?w=300&h=200&fit=crop&crop=center";
const IMG_BREATH: &str =
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=300&h=200&fit=crop&crop=center";

/// Simple `(morning, evening)` pairs for days without extra detail.
/// Index 0 is day 4.
const PLAIN_DAYS: &[[(&str, &str); 2]] = &[
    [
        ("Mindful Start", "Schreibe 1 Dankbarkeit auf – positiver Fokus beeinflusst deinen ganzen Tag."),
        ("Sleep Journal", "Notiere kurz 3 Gedanken – entlastet den Kopf und reduziert Grübeln."),
    ],
    [
        ("Protein Kick", "Ein kleines Protein-Frühstück stabilisiert Blutzucker & Fokus."),
        ("Breathing Reset", "4-7-8 Atemtechnik: 4s ein, 7s halten, 8s aus – senkt Puls & Stress."),
    ],
    [
        ("Cold Splash", "Kaltes Wasser im Gesicht/Dusche aktiviert Nervensystem & Fokus."),
        ("Warm Ritual", "Warme Dusche oder Tee signalisiert: jetzt runterfahren."),
    ],
    [
        ("Plan the Day", "3 Prioritäten notieren – gibt Klarheit & Richtung."),
        ("Consistency Wins", "Geh möglichst jeden Abend zur gleichen Zeit ins Bett – dein Körper liebt Rhythmus."),
    ],
    [
        ("Electrolyte Reset", "Ein Stick Elektrolyte füllt Speicher & bringt Energie."),
        ("Screen-Free Zone", "15 Min ohne Bildschirm vorm Schlaf – Ruhe für Augen & Kopf."),
    ],
    [
        ("Sun Exposure", "10 Min Morgenlicht stabilisieren deinen zirkadianen Rhythmus."),
        ("Darkness Hack", "Dimme Lichter am Abend – Dunkelheit = Melatonin-Signal."),
    ],
    [
        ("Posture Reset", "Aufrecht stehen, tief atmen – aktiviert Kreislauf & Präsenz."),
        ("Bed Only for Sleep", "Nutze dein Bett nur zum Schlafen – Ort-Routine-Verknüpfung stärkt Schlaf."),
    ],
    [
        ("Morning Walk", "10 Min Gehen – Kreislauf an, Kopf klar."),
        ("Herbal Tea", "Kamille/Lavendel beruhigen & unterstützen Entspannung."),
    ],
    [
        ("Smile Start", "30 Sekunden bewusst lächeln – trickst dein Gehirn in Positivität."),
        ("Stretch & Relax", "Sanfte Dehnung vor dem Schlaf reduziert Muskelspannung."),
    ],
    [
        ("Protein Shake", "Eiweiß am Morgen = langanhaltende Energie & Sättigung."),
        ("Gratitude Night", "Schreibe 1 Sache auf, für die du dankbar bist – fördert positiven Schlaf."),
    ],
    [
        ("Mindful Breath", "3 tiefe Atemzüge → mehr Fokus, weniger Stress."),
        ("Digital Detox", "1h vor Schlaf keine Socials – Kopf kommt schneller zur Ruhe."),
    ],
    [
        ("Citrus Boost", "Vitamin C unterstützt Immunsystem – starte frisch."),
        ("Foam Roll", "5 Min Faszien-Rolling lockert Muskeln & entspannt."),
    ],
    [
        ("Gratitude Note", "Notiere 1 kleine Freude von gestern – shiftet deinen Fokus."),
        ("Box Breathing", "4s ein, 4s halten, 4s aus, 4s halten – beruhigt das Nervensystem."),
    ],
    [
        ("Protein + Electrolyte", "Kombi aus Eiweiß & Mineralien = stabiler Start."),
        ("Candlelight", "Kerzenlicht statt Deckenlampe → sanftes Schlaf-Signal."),
    ],
    [
        ("Power Playlist", "1 Lieblingssong am Morgen hebt sofort die Stimmung."),
        ("Sleep Prep", "Bett frisch & Zimmer aufgeräumt → schneller runterkommen."),
    ],
    [
        ("Early Steps", "1.000 Schritte vor 10 Uhr – Aktivierung pur."),
        ("Cool Shower", "Kurze kühle Dusche senkt Kerntemperatur für besseren Schlaf."),
    ],
    [
        ("Vision Note", "1 Tagesziel notieren – mentaler Fokus-Booster."),
        ("Aromatherapy", "Lavendelduft reduziert Stress & fördert Schlafqualität."),
    ],
    [
        ("Hydration Habit", "Glas Wasser direkt nach dem Aufstehen = Energy Trigger."),
        ("Read a Page", "1 Seite Buch statt Handy – dein Gehirn beruhigt sich."),
    ],
    [
        ("Stretch Spine", "Mobilisiere Rücken & Nacken – verhindert Büroverspannungen."),
        ("Tea & Breath", "Kräutertee + 3 tiefe Atemzüge = Schlafbrücke."),
    ],
    [
        ("Morning Light", "Ans Fenster gehen – Licht synchronisiert deine innere Uhr."),
        ("Warm Socks", "Warme Füße helfen, schneller einzuschlafen."),
    ],
    [
        ("Body Scan", "2 Min Körper-Scan: Aufmerksamkeit von Kopf bis Fuß."),
        ("Phone Away", "Lege das Handy in ein anderes Zimmer → besserer Tiefschlaf."),
    ],
    [
        ("Mini Workout", "10 Push-ups oder Squats – Weckruf für Körper & Geist."),
        ("Stretch Legs", "Bein-Dehnung senkt Muskelspannung → leichteres Einschlafen."),
    ],
    [
        ("Cold Drink", "Ein kühles Glas Wasser belebt sofort."),
        ("Light Snack", "Klein & eiweißreich (z. B. Joghurt) → stabiler Blutzucker."),
    ],
    [
        ("Coffee Delay", "Warte ~60 Min mit Kaffee – besserer Cortisolrhythmus."),
        ("Dark Room", "Verdunkle dein Schlafzimmer → tieferer Schlaf."),
    ],
    [
        ("Morning Affirmation", "\"Ich bin bereit für den Tag.\" – kurzer mentaler Anker."),
        ("Bedtime Routine", "Immer gleiche 3 Schritte (Zähne, Tee, Journal) = Schlafanker."),
    ],
    [
        ("Focus Breathing", "2 Min Atemübung – Fokus & Energie."),
        ("Silent 5", "5 Min Stille vorm Schlaf – weniger Gedankenkarussell."),
    ],
    [
        ("Reset Reflection", "Was hat in 30 Tagen am meisten geholfen? Kurz notieren."),
        ("Celebrate Sleep", "Feiere deinen Fortschritt – Schlaf ist dein Superpower-Finale."),
    ],
];

/// All registered challenges.
pub fn challenges() -> &'static [Challenge] {
    static CATALOG: OnceLock<Vec<Challenge>> = OnceLock::new();
    CATALOG.get_or_init(|| vec![thirty_day_reset()])
}

fn step(id: u32, title: &str, duration: &str, image_url: &str, tips: &str, why: &str) -> Step {
    Step {
        id,
        title: title.to_string(),
        description: String::new(),
        duration: duration.to_string(),
        icon: String::new(),
        image_url: Some(image_url.to_string()),
        has_audio: None,
        tips: tips.to_string(),
        why: why.to_string(),
    }
}

fn detail(text: &str) -> Option<String> {
    Some(text.to_string())
}

fn thirty_day_reset() -> Challenge {
    let mut days = Vec::with_capacity(60);

    days.push(DayEntry::new(
        1,
        RitualType::Morning,
        "Hydration First",
        "Trinke Wasser vor Kaffee – dein Körper verliert über Nacht bis zu 1 Liter Flüssigkeit.",
    ));
    let mut box_breathing = step(
        3,
        "Box Breathing (5 Min)",
        "5 Min",
        IMG_BREATH,
        "Atme 4 Sekunden ein, halte 4 Sekunden, atme 4 Sekunden aus, halte 4 Sekunden – wiederhole.",
        "Diese Atemtechnik beruhigt dein Nervensystem und stoppt das Gedankenkarussell.",
    );
    box_breathing.has_audio = Some(true);
    days.push(DayEntry {
        header_image_url: detail(HEADER_IMAGE),
        action: detail("Handy weglegen (1 Min)"),
        action_description: detail("Sensorischer Trigger → dein Signal: Der Tag ist vorbei."),
        product: detail("Relax-Stick trinken (2 Min)"),
        product_description: detail("Hydration + Magnesium → dein Körper signalisiert Ruhe."),
        content: detail("Box-Breathing Audio (3 Min)"),
        content_description: detail("Beruhigt deine Gedanken, fährt das Nervensystem runter."),
        steps: vec![
            step(
                1,
                "Kerze anzünden",
                "1 Min",
                IMG_CANDLE,
                "Zünde eine Kerze an und stelle sie sichtbar hin.",
                "Der sensorische Trigger signalisiert: Der Tag ist vorbei – dein Körper darf zur Ruhe kommen.",
            ),
            step(
                2,
                "Sleep Stick trinken",
                "2 Min",
                IMG_GLASS,
                "Bereite dir ein Glas Wasser mit dem Stick zu und trinke ihn langsam.",
                "Hydration + Magnesium entspannen Muskeln und Nervensystem – dein Körper schaltet in den Ruhemodus.",
            ),
            box_breathing,
        ],
        ..DayEntry::new(
            1,
            RitualType::Evening,
            "Finde heute leichter in den Schlaf",
            "Lass den Tag hinter dir – dein Körper bereitet sich jetzt auf erholsamen Schlaf vor.",
        )
    });

    days.push(DayEntry::new(
        2,
        RitualType::Morning,
        "Fresh Air",
        "Öffne das Fenster: Sonnenlicht & frische Luft regulieren deine innere Uhr.",
    ));
    days.push(DayEntry {
        header_image_url: detail(HEADER_IMAGE),
        action: detail("Blue Light Detox (1 Stunde)"),
        action_description: detail("Weniger blaues Licht = mehr Melatonin → dein Schlaf wird tiefer."),
        product: detail("Journaling (3 Sorgen notieren)"),
        product_description: detail(
            "Indem du deine Gedanken \"parkst\", entlastest du dein Gehirn für die Nacht.",
        ),
        content: detail("Sleep Stick trinken"),
        content_description: detail(
            "Elektrolyte stabilisieren die Nachtbalance, Glycin kann die Schlaftiefe fördern.",
        ),
        steps: vec![
            step(
                1,
                "Blue Light Detox",
                "1 Stunde",
                IMG_CANDLE,
                "Lege Handy/Laptop eine Stunde vor dem Schlafen beiseite oder nutze Nachtmodus.",
                "Weniger blaues Licht = mehr Melatonin → dein Schlaf wird tiefer.",
            ),
            step(
                2,
                "Journaling (3 Sorgen notieren)",
                "5 Min",
                IMG_GLASS,
                "Schreibe 3 Dinge auf, die dich gerade beschäftigen.",
                "Indem du deine Gedanken \"parkst\", entlastest du dein Gehirn für die Nacht.",
            ),
            step(
                3,
                "Sleep Stick trinken",
                "2 Min",
                IMG_BREATH,
                "Trinke ein Glas mit Sleep Stick, bevor du ins Bett gehst.",
                "Elektrolyte stabilisieren die Nachtbalance, Glycin kann die Schlaftiefe fördern.",
            ),
        ],
        ..DayEntry::new(
            2,
            RitualType::Evening,
            "Ich wache nachts auf / schlafe unruhig",
            "Lass den Tag hinter dir – dein Körper bereitet sich jetzt auf erholsamen Schlaf vor.",
        )
    });

    days.push(DayEntry::new(
        3,
        RitualType::Morning,
        "Movement Boost",
        "5 Minuten Stretching oder Mobility – bringt Kreislauf & Gelenke in Schwung.",
    ));
    days.push(DayEntry {
        product: detail("Relax-Stick trinken 🥤 (2 Min)"),
        content: detail("2 Min Stretching (Video) • 5 Min Guided Meditation 🎧 (Audio)"),
        ..DayEntry::new(
            3,
            RitualType::Evening,
            "Sleep Stack 3 - Fast-Sleep Reset",
            "Schnelle Entspannungsroutine für besseren Schlaf",
        )
    });

    for (offset, [morning, evening]) in PLAIN_DAYS.iter().enumerate() {
        let day = offset as u32 + 4;
        days.push(DayEntry::new(day, RitualType::Morning, morning.0, morning.1));
        days.push(DayEntry::new(day, RitualType::Evening, evening.0, evening.1));
    }

    Challenge {
        id: DEFAULT_CHALLENGE_ID.to_string(),
        name: "30-Day Reset".to_string(),
        description: "Perform by Day, Recover by Night".to_string(),
        days,
    }
}
