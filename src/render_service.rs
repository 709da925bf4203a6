use chrono::{Datelike, NaiveDate};

use crate::logo_service::default_logo;
use crate::models::{Match, Scorer, Section, Team};

/// The three fragments the site is built from, rebuilt as one unit on
/// every refresh tick.
#[derive(Debug, Clone, Default)]
pub struct RenderedViews {
    pub matches: String,
    pub standings: String,
    pub scorers: String,
}

pub fn render_all(matches: &[Match], teams: &[Team], scorers: &[Scorer]) -> RenderedViews {
    RenderedViews {
        matches: render_matches(matches),
        standings: render_standings(teams),
        scorers: render_scorers(scorers),
    }
}

pub fn render_matches(matches: &[Match]) -> String {
    if matches.is_empty() {
        return r#"<div class="empty-state">
    <div class="empty-state-icon">⚽</div>
    <div class="empty-state-text">No hay partidos programados</div>
    <p style="margin-top: 10px; color: #999;">Próximamente se agregarán los partidos</p>
</div>"#.to_string();
    }

    matches.iter().map(render_match_card).collect()
}

fn render_match_card(m: &Match) -> String {
    format!(
        r#"<div class="match-card">
    <div class="match-header">
        <div class="match-date">{date}</div>
        <div class="match-time">{time}</div>
    </div>
    <div class="match-teams">
        <div class="team">
            <img src="{home_logo}" alt="{home}" class="team-logo">
            <div class="team-name">{home}</div>
        </div>
        <div class="vs">VS</div>
        <div class="team">
            <img src="{away_logo}" alt="{away}" class="team-logo">
            <div class="team-name">{away}</div>
        </div>
    </div>
</div>"#,
        date = format_match_date(&m.date),
        time = m.time,
        home_logo = logo_or_default(&m.homeLogo),
        home = m.homeTeam,
        away_logo = logo_or_default(&m.awayLogo),
        away = m.awayTeam,
    )
}

pub fn render_standings(teams: &[Team]) -> String {
    if teams.is_empty() {
        return r#"<tr>
    <td colspan="10" style="text-align: center; padding: 40px;">
        <div class="empty-state">
            <div class="empty-state-icon">🏆</div>
            <div class="empty-state-text">Tabla de posiciones en preparación</div>
            <p style="margin-top: 10px; color: #999;">Próximamente se actualizará la tabla</p>
        </div>
    </td>
</tr>"#.to_string();
    }

    teams.iter().enumerate().map(|(index, team)| format!(
        r#"<tr>
    <td class="position">{rank}</td>
    <td>
        <div class="team-info">
            <img src="{logo}" alt="{name}" class="table-team-logo">
            <span class="table-team-name">{name}</span>
        </div>
    </td>
    <td class="center">{pj}</td>
    <td class="center">{g}</td>
    <td class="center">{e}</td>
    <td class="center">{p}</td>
    <td class="center">{gf}</td>
    <td class="center">{gc}</td>
    <td class="center">{dg}</td>
    <td class="center"><span class="points">{pts}</span></td>
</tr>"#,
        rank = index + 1,
        logo = logo_or_default(&team.logo),
        name = team.name,
        pj = team.pj,
        g = team.g,
        e = team.e,
        p = team.p,
        gf = team.gf,
        gc = team.gc,
        dg = format_goal_diff(team.dg),
        pts = team.pts,
    )).collect()
}

pub fn render_scorers(scorers: &[Scorer]) -> String {
    if scorers.is_empty() {
        return r#"<tr>
    <td colspan="4" style="text-align: center; padding: 40px;">
        <div class="empty-state">
            <div class="empty-state-icon">👟</div>
            <div class="empty-state-text">Tabla de goleadores en preparación</div>
            <p style="margin-top: 10px; color: #999;">Próximamente se actualizarán los goleadores</p>
        </div>
    </td>
</tr>"#.to_string();
    }

    scorers.iter().enumerate().map(|(index, scorer)| format!(
        r#"<tr>
    <td class="position">{rank}</td>
    <td>
        <span style="font-weight: 600; font-size: 1.05em;">{medal}{name}</span>
    </td>
    <td>
        <span class="table-team-name">{team}</span>
    </td>
    <td class="center">
        <span class="goals-badge">{goals}</span>
    </td>
</tr>"#,
        rank = index + 1,
        medal = medal_for(index),
        name = scorer.name,
        team = scorer.team,
        goals = scorer.goals,
    )).collect()
}

/// Full page shell. Exactly one tab and one section carry the active
/// class, the one matching `current`.
pub fn render_page(current: Section, main_logo: &str, views: &RenderedViews) -> String {
    let tabs: String = Section::get_all().iter().map(|section| format!(
        r#"<a class="tab{active}" href="/section/{id}">{label}</a>"#,
        active = active_marker(*section, current),
        id = section,
        label = section.tab_label(),
    )).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Liga MFM</title>
</head>
<body>
    <header>
        <img id="mainLogo" src="{main_logo}" alt="Liga MFM">
    </header>
    <nav class="tabs">{tabs}</nav>
    <section id="partidos" class="section{partidos_active}">
        <div id="matches-container">{matches}</div>
    </section>
    <section id="posiciones" class="section{posiciones_active}">
        <table class="standings-table">
            <thead>
                <tr><th>Pos</th><th>Equipo</th><th>PJ</th><th>G</th><th>E</th><th>P</th><th>GF</th><th>GC</th><th>DG</th><th>PTS</th></tr>
            </thead>
            <tbody id="standings-tbody">{standings}</tbody>
        </table>
    </section>
    <section id="goleadores" class="section{goleadores_active}">
        <table class="scorers-table">
            <thead>
                <tr><th>Pos</th><th>Jugador</th><th>Equipo</th><th>Goles</th></tr>
            </thead>
            <tbody id="scorers-tbody">{scorers}</tbody>
        </table>
    </section>
</body>
</html>"#,
        main_logo = main_logo,
        tabs = tabs,
        partidos_active = active_marker(Section::Partidos, current),
        posiciones_active = active_marker(Section::Posiciones, current),
        goleadores_active = active_marker(Section::Goleadores, current),
        matches = views.matches,
        standings = views.standings,
        scorers = views.scorers,
    )
}

fn active_marker(section: Section, current: Section) -> &'static str {
    if section == current { " active" } else { "" }
}

fn logo_or_default(logo: &Option<String>) -> &str {
    logo.as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| default_logo())
}

/// Positive differences carry an explicit plus, zero and negative are
/// left as the number formats itself.
fn format_goal_diff(dg: i16) -> String {
    if dg > 0 {
        format!("+{dg}")
    } else {
        dg.to_string()
    }
}

fn medal_for(index: usize) -> &'static str {
    match index {
        0 => "🥇 ",
        1 => "🥈 ",
        2 => "🥉 ",
        _ => "",
    }
}

const WEEKDAYS_ES: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];
const MONTHS_ES: [&str; 12] = ["ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic"];

/// "2026-03-14" -> "sáb, 14 mar 2026". A date that does not parse is
/// shown as stored.
fn format_match_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!(
            "{}, {} {} {}",
            WEEKDAYS_ES[parsed.weekday().num_days_from_monday() as usize],
            parsed.day(),
            MONTHS_ES[parsed.month0() as usize],
            parsed.year(),
        ),
        Err(_) => date.to_string(),
    }
}
