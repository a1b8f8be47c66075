use planning_bpjeps::extract::{extract_events, extract_events_with, ExtractOptions, Strategy};
use planning_bpjeps::planning::model::EventType;

const WEEK_TABLE_PAGE: &str = r#"
<html>
  <body>
    <p>Planning public JURA SPORT</p>
    <table>
      <tr>
        <td></td>
        <td>Lundi</td>
        <td>Mardi</td>
        <td>Mercredi</td>
        <td>Jeudi</td>
        <td>Vendredi</td>
      </tr>
      <tr>
        <td>8h00</td>
        <td>Anatomie
M. Dupont
Salle A</td>
        <td></td>
        <td></td>
        <td></td>
        <td></td>
      </tr>
    </table>
  </body>
</html>
"#;

#[test_log::test]
fn should_extract_one_event_from_a_structured_table() {
    let extraction = extract_events(WEEK_TABLE_PAGE);

    assert_eq!(extraction.strategy, Some(Strategy::StructuredTable));
    assert_eq!(extraction.events.len(), 1, "{:?}", extraction.events);

    let event = &extraction.events[0];
    assert_eq!(event.title, "Anatomie");
    assert_eq!(event.teacher, "M. Dupont");
    assert_eq!(event.room, "Salle A");
    assert_eq!(event.day, 0);
    assert_eq!(event.day_name, "lundi");
    assert_eq!(event.start_time, "08:00");
    assert_eq!(event.end_time, "09:00");
}

#[test_log::test]
fn should_project_end_times_from_row_span_and_slot_duration() {
    let page = r#"
    <table>
      <tr><td></td><td>Lundi</td></tr>
      <tr><td>8h00</td><td rowspan="2">Renforcement musculaire
M. CARVALHO M.</td></tr>
    </table>
    "#;

    let hour_slots = extract_events(page);
    assert_eq!(hour_slots.events[0].end_time, "10:00");

    let half_slots = extract_events_with(page, ExtractOptions { slot_minutes: 30 });
    assert_eq!(half_slots.events[0].end_time, "09:00");
}

#[test_log::test]
fn should_extract_despite_absurd_span_attributes() {
    let page = r#"
    <table>
      <tr><td></td><td>Lundi</td></tr>
      <tr><td>8h00</td><td rowspan="99999999" colspan="99999999">Renforcement musculaire
M. CARVALHO M.</td></tr>
    </table>
    "#;

    let extraction = extract_events(page);

    assert_eq!(extraction.events.len(), 1);
    assert_eq!(extraction.events[0].title, "Renforcement musculaire");
    assert_eq!(extraction.events[0].start_time, "08:00");
    assert_eq!(extraction.events[0].day, 0);
}

#[test_log::test]
fn should_extract_styled_block_under_a_weekday_ancestor() {
    let page = r#"
    <html>
      <body>
        <div>
          <h3>mardi 14 octobre</h3>
          <div style="background: rgb(144, 238, 144)">Musculation
Mme Martin
Gymnase</div>
        </div>
      </body>
    </html>
    "#;

    let extraction = extract_events(page);

    assert_eq!(extraction.strategy, Some(Strategy::StyledBlocks));
    assert_eq!(extraction.events.len(), 1);

    let event = &extraction.events[0];
    assert_eq!(event.day, 1);
    assert_eq!(event.day_name, "mardi");
    assert_eq!(event.color, "#90EE90");
    assert_eq!(event.teacher, "Mme Martin");
    assert_eq!(event.room, "Gymnase");
}

#[test_log::test]
fn should_return_no_events_for_a_page_of_short_lines() {
    let page = r#"
    <html>
      <body>
        <p>Accueil</p>
        <p>Menu 2025</p>
        <p>Contact</p>
      </body>
    </html>
    "#;

    let extraction = extract_events(page);

    assert!(extraction.events.is_empty());
    assert_eq!(extraction.strategy, None);
}

#[test_log::test]
fn should_keep_only_the_first_of_identical_styled_blocks() {
    let page = r#"
    <div>
      <div style="background: cyan">Musculation
Gymnase B</div>
      <div style="background: cyan">Musculation
Gymnase B</div>
    </div>
    "#;

    let extraction = extract_events(page);

    assert_eq!(extraction.events.len(), 1);
    assert_eq!(extraction.events[0].id, 0);
}

#[test_log::test]
fn should_never_emit_weekday_or_boilerplate_titles() {
    let page = r#"
    <table>
      <tr><td></td><td>Lundi</td><td>Mardi</td></tr>
      <tr>
        <td>9h</td>
        <td>Mercredi férié</td>
        <td>Planning public JURA SPORT</td>
      </tr>
      <tr>
        <td>10h</td>
        <td>Sélectionnez une formation</td>
        <td>Étirements collectifs
Mme JACOTOT J.</td>
      </tr>
    </table>
    "#;

    let extraction = extract_events(page);

    for event in &extraction.events {
        assert_ne!(event.title.to_lowercase(), "lundi");
        assert!(!event.title.contains("JURA SPORT"), "{:?}", event.title);
        assert!(!event.title.contains("Planning public"), "{:?}", event.title);
        assert!(!event.title.contains("Sélectionnez"), "{:?}", event.title);
    }

    assert_eq!(extraction.events.len(), 2, "{:?}", extraction.events);
    assert_eq!(extraction.events[0].title, "Mercredi férié");
    assert_eq!(extraction.events[1].title, "Étirements collectifs");
}

#[test_log::test]
fn should_not_try_weaker_strategies_once_one_yields() {
    let page = r#"
    <html>
      <body>
        <div style="background: yellow">Bloc stylé hors tableau
avec deux lignes</div>
        <table>
          <tr><td></td><td>Lundi</td></tr>
          <tr><td>8h</td><td>Anatomie fonctionnelle
M. Dupont</td></tr>
        </table>
      </body>
    </html>
    "#;

    let extraction = extract_events(page);

    assert_eq!(extraction.strategy, Some(Strategy::StructuredTable));
    assert_eq!(extraction.events.len(), 1);
    assert_eq!(extraction.events[0].title, "Anatomie fonctionnelle");
}

#[test_log::test]
fn should_fall_back_to_class_hints_without_tables_or_styles() {
    let page = r#"
    <div class="planning-seance">Pilates débutant 25 26
Mme JACOTOT J.</div>
    "#;

    let extraction = extract_events(page);

    assert_eq!(extraction.strategy, Some(Strategy::ClassHints));
    assert_eq!(extraction.events.len(), 1);
    assert_eq!(extraction.events[0].title, "Pilates débutant 25 26");
}

#[test_log::test]
fn should_fall_back_to_free_text_as_a_last_resort() {
    let page = r#"
    <html>
      <body>
        <p>Cours collectif pilates 9h30 salle B12</p>
      </body>
    </html>
    "#;

    let extraction = extract_events(page);

    assert_eq!(extraction.strategy, Some(Strategy::FreeText));
    assert_eq!(extraction.events.len(), 1);

    let event = &extraction.events[0];
    assert_eq!(event.title, "Cours collectif pilates 9h30 salle B12");
    assert_eq!(event.start_time, "09:30");
    assert_eq!(event.day_name, "inconnu");
}

#[test_log::test]
fn should_classify_and_color_events_from_cell_hints() {
    let page = r#"
    <table>
      <tr><td></td><td>Lundi</td><td>Mardi</td></tr>
      <tr>
        <td>14h</td>
        <td style="background-color: rgb(255, 255, 0)">Concevoir un projet
25 26 MOIRANS BPJEPS AF HM CE</td>
        <td class="pink">TP pratique haltérophilie
CAP MAURIANA 2</td>
      </tr>
    </table>
    "#;

    let extraction = extract_events(page);

    assert_eq!(extraction.events.len(), 2);

    let projet = &extraction.events[0];
    assert_eq!(projet.event_type, EventType::Projet);
    assert_eq!(projet.color, "#FFFF00");
    assert_eq!(projet.group, "25 26 MOIRANS BPJEPS AF HM CE");

    let tp = &extraction.events[1];
    assert_eq!(tp.event_type, EventType::Tp);
    assert_eq!(tp.color, "#FFB6C1");
    assert_eq!(tp.room, "CAP MAURIANA 2");
    assert_eq!(tp.day, 1);
}

#[test_log::test]
fn should_keep_every_event_inside_the_week_and_time_format() {
    let page = r#"
    <table>
      <tr><td>Semaine 40</td><td>Lundi</td><td>Mardi</td><td>Mercredi</td></tr>
      <tr><td>8h</td><td>Anatomie appliquée</td><td>Musculation guidée</td><td></td></tr>
      <tr><td>9h30</td><td></td><td>Stretching postural</td><td>Communication orale</td></tr>
      <tr><td>14:15</td><td colspan="2">Concevoir un projet sportif</td><td></td></tr>
    </table>
    "#;

    let extraction = extract_events(page);
    assert!(!extraction.events.is_empty());

    for event in &extraction.events {
        assert!(event.day <= 4, "{:?}", event);

        if event.day_name != "inconnu" {
            assert_eq!(
                event.day_name,
                ["lundi", "mardi", "mercredi", "jeudi", "vendredi"][event.day as usize]
            );
        }

        if !event.start_time.is_empty() {
            assert_eq!(event.start_time.len(), 5, "{:?}", event.start_time);
            assert_eq!(&event.start_time[2..3], ":");
            assert!(event.start_time[..2].chars().all(|c| c.is_ascii_digit()));
            assert!(event.start_time[3..].chars().all(|c| c.is_ascii_digit()));
        }
    }
}
