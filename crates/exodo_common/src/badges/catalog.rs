//! Badge catalog.
//!
//! Display metadata for every slug the rules can grant. Rank entries are
//! built from the rank table so the two never drift apart.

use crate::progression::Rank;
use exodo_shared::BadgeDefinition;

const RANK_ICON: &str = "pi-shield";
const RANK_DESCRIPTION: &str = "Posto alcançado pela progressão de nível";

static FIXED_BADGES: &[BadgeDefinition] = &[
    // Staff rating
    BadgeDefinition::new("rating_star_1", "1 Estrela", "pi-star", "#9e9e9e", "Avaliação da staff: 1 estrela"),
    BadgeDefinition::new("rating_star_2", "2 Estrelas", "pi-star", "#8d6e63", "Avaliação da staff: 2 estrelas"),
    BadgeDefinition::new("rating_star_3", "3 Estrelas", "pi-star", "#607d8b", "Avaliação da staff: 3 estrelas"),
    BadgeDefinition::new("rating_star_4", "4 Estrelas", "pi-star-fill", "#daa520", "Avaliação da staff: 4 estrelas"),
    BadgeDefinition::new("rating_star_5", "5 Estrelas", "pi-star-fill", "#dc143c", "Avaliação da staff: 5 estrelas"),
    // Specialty
    BadgeDefinition::new("specialty_assault", "Assalto", "pi-bolt", "#388E3C", "Especialidade declarada: assalto"),
    BadgeDefinition::new("specialty_dmr", "DMR", "pi-eye", "#1976d2", "Especialidade declarada: atirador designado"),
    BadgeDefinition::new("specialty_sniper", "Sniper", "pi-bullseye", "#081534", "Especialidade declarada: sniper"),
    BadgeDefinition::new("specialty_support", "Suporte", "pi-box", "#6b7b3a", "Especialidade declarada: suporte"),
    // Peer-rated mastery
    BadgeDefinition::new("master_aim", "Mestre da Pontaria", "pi-bullseye", "#dc143c", "Pontaria reconhecida pelos colegas"),
    BadgeDefinition::new("master_tactics", "Mestre Tático", "pi-sitemap", "#7c4dff", "Tática reconhecida pelos colegas"),
    BadgeDefinition::new("master_communication", "Mestre da Comunicação", "pi-megaphone", "#1976d2", "Comunicação reconhecida pelos colegas"),
    BadgeDefinition::new("master_teamwork", "Mestre do Trabalho em Equipe", "pi-users", "#388E3C", "Trabalho em equipe reconhecido pelos colegas"),
    BadgeDefinition::new("master_discipline", "Mestre da Disciplina", "pi-check-square", "#081534", "Disciplina reconhecida pelos colegas"),
    BadgeDefinition::new("master_stamina", "Mestre da Resistência", "pi-heart", "#daa520", "Resistência reconhecida pelos colegas"),
    // Arsenal
    BadgeDefinition::new("arsenal_collector", "Colecionador", "pi-th-large", "#8d6e63", "Cinco ou mais armas cadastradas"),
    BadgeDefinition::new("high_power_unit", "Alta Potência", "pi-bolt", "#dc143c", "Arma com mais de 400 FPS"),
    BadgeDefinition::new("certified_sniper", "Sniper Certificado", "pi-bullseye", "#081534", "Possui uma arma da categoria sniper"),
    BadgeDefinition::new("verified_arsenal", "Arsenal Verificado", "pi-verified", "#388E3C", "Nota fiscal anexada a uma arma"),
    BadgeDefinition::new("armorer_apprentice", "Aprendiz de Armeiro", "pi-wrench", "#607d8b", "Manutenção registrada em uma arma"),
    BadgeDefinition::new("well_maintained", "Bem Cuidado", "pi-check-circle", "#388E3C", "Todas as armas com manutenção registrada"),
    BadgeDefinition::new("arsenal_backup_ready", "Reserva Pronta", "pi-refresh", "#1976d2", "Secundária revisada nos últimos 30 dias"),
    BadgeDefinition::new("arsenal_pistolero", "Pistoleiro", "pi-angle-double-right", "#6b7b3a", "Duas ou mais armas secundárias"),
    // Loadout
    BadgeDefinition::new("standard_operator", "Operador Padrão", "pi-user", "#6b7b3a", "Um uniforme completo"),
    BadgeDefinition::new("tactical_chameleon", "Camaleão Tático", "pi-palette", "#7c4dff", "Vários uniformes completos"),
    BadgeDefinition::new("pmc_expert", "Especialista PMC", "pi-briefcase", "#081534", "Uniforme PMC completo"),
    // Financial
    BadgeDefinition::new("active_standing", "Em Dia", "pi-wallet", "#388E3C", "Pagamentos em dia"),
    BadgeDefinition::new("generous_contributor", "Contribuinte Generoso", "pi-gift", "#daa520", "Contribuiu para uma meta da equipe"),
    BadgeDefinition::new("punctual_operator", "Pontual", "pi-clock", "#1976d2", "Pagamento feito até o vencimento"),
    // Logistics
    BadgeDefinition::new("mobile_unit", "Unidade Móvel", "pi-car", "#607d8b", "Veículo cadastrado"),
    BadgeDefinition::new("logistics_specialist", "Especialista em Logística", "pi-map", "#1976d2", "Ofereceu uma carona"),
    BadgeDefinition::new("road_captain", "Capitão de Estrada", "pi-directions", "#daa520", "Cinco ou mais caronas oferecidas"),
    BadgeDefinition::new("hospitality_host", "Anfitrião", "pi-home", "#388E3C", "Trouxe um visitante"),
    BadgeDefinition::new("team_ambassador", "Embaixador", "pi-flag", "#7c4dff", "Trouxe três ou mais visitantes"),
    // Maintenance history
    BadgeDefinition::new("bench_master", "Mestre de Bancada", "pi-cog", "#8d6e63", "Dez manutenções concluídas"),
    BadgeDefinition::new("combat_engineer", "Engenheiro de Combate", "pi-cog", "#dc143c", "Vinte e cinco manutenções concluídas"),
    BadgeDefinition::new("upgrade_expert", "Especialista em Upgrade", "pi-arrow-up", "#7c4dff", "Upgrade concluído"),
    BadgeDefinition::new("detailed_tech", "Técnico Detalhista", "pi-file-edit", "#607d8b", "Laudo técnico com mais de 100 caracteres"),
    // Missions
    BadgeDefinition::new("mission_veteran", "Veterano de Missões", "pi-calendar", "#8d6e63", "Vinte missões concluídas"),
    BadgeDefinition::new("mission_reporter_silver", "Relator de Prata", "pi-file", "#9e9e9e", "Cinco relatórios de missão liderada"),
    BadgeDefinition::new("mission_perfect_attendance", "Presença Perfeita", "pi-calendar-plus", "#388E3C", "Quatro missões no mesmo mês"),
    BadgeDefinition::new("mission_leader_gold", "Líder de Ouro", "pi-crown", "#daa520", "Três missões lideradas com 80% de presença"),
    // Personal, health and legacy
    BadgeDefinition::new("blood_donor", "Doador de Sangue", "pi-heart-fill", "#dc143c", "Doador de sangue declarado"),
    BadgeDefinition::new("health_protected", "Protegido", "pi-plus-circle", "#388E3C", "Possui plano de saúde"),
    BadgeDefinition::new("federated_operator", "Federado", "pi-id-card", "#1976d2", "Número de federação informado"),
    BadgeDefinition::new("safety_first", "Segurança em Primeiro Lugar", "pi-exclamation-triangle", "#daa520", "Alergias ou medicações informadas"),
    BadgeDefinition::new("social_media_elite", "Elite das Redes", "pi-instagram", "#7c4dff", "Instagram informado"),
    BadgeDefinition::new("camera_ready", "Pronto para a Câmera", "pi-camera", "#607d8b", "Autorizou o uso de imagem"),
    BadgeDefinition::new("prestige_master", "Mestre do Prestígio", "pi-sun", "#dc143c", "Completou o ciclo de níveis"),
    BadgeDefinition::new("birthday_warrior", "Guerreiro Aniversariante", "pi-gift", "#daa520", "Avaliado no dia do aniversário"),
    BadgeDefinition::new("pioneer_member", "Pioneiro", "pi-history", "#8d6e63", "Membro desde a fundação"),
    BadgeDefinition::new("terms_compliant", "Termos Aceitos", "pi-check", "#388E3C", "Aceitou os termos da equipe"),
    BadgeDefinition::new("profile_storyteller", "Contador de Histórias", "pi-comment", "#607d8b", "Frase de perfil preenchida"),
    BadgeDefinition::new("seasoned_veteran", "Veterano Experiente", "pi-star", "#081534", "Nível máximo de experiência declarado"),
    BadgeDefinition::new("emergency_ready", "Pronto para Emergências", "pi-phone", "#dc143c", "Contato de emergência informado"),
    BadgeDefinition::new("weekend_warrior", "Guerreiro Integral", "pi-calendar", "#6b7b3a", "Disponível em dias úteis e fins de semana"),
    BadgeDefinition::new("specialized_professional", "Profissional Especializado", "pi-briefcase", "#1976d2", "Profissão informada"),
    BadgeDefinition::new("blood_type_ready", "Tipagem Pronta", "pi-tint", "#dc143c", "Tipo sanguíneo e contato de emergência informados"),
    // Capstone
    BadgeDefinition::new("iron_operator", "Operador de Ferro", "pi-shield", "#081534", "Nível 10, cinco estrelas e perfil completo"),
];

fn rank_badge(rank: Rank) -> BadgeDefinition {
    BadgeDefinition::new(rank.slug(), rank.label(), RANK_ICON, rank.color(), RANK_DESCRIPTION)
}

/// Every catalog entry, ranks in ascending order first
pub fn all_badges() -> Vec<BadgeDefinition> {
    Rank::all()
        .map(rank_badge)
        .chain(FIXED_BADGES.iter().copied())
        .collect()
}

/// Look up a slug. Unknown slugs, including legacy ones still stored on
/// operators, return None and should be shown as-is.
pub fn find(slug: &str) -> Option<BadgeDefinition> {
    if let Some(rank) = Rank::all().find(|r| r.slug() == slug) {
        return Some(rank_badge(rank));
    }
    FIXED_BADGES.iter().find(|b| b.slug == slug).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badges::rules::BADGE_RULES;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(all_badges().len(), 80);
    }

    #[test]
    fn test_slugs_are_unique() {
        let all = all_badges();
        let slugs: HashSet<_> = all.iter().map(|b| b.slug).collect();
        assert_eq!(slugs.len(), all.len());
    }

    #[test]
    fn test_every_rule_output_is_cataloged() {
        for rule in BADGE_RULES {
            for slug in rule.candidates() {
                assert!(find(slug).is_some(), "{} from {} missing", slug, rule.name);
            }
        }
    }

    #[test]
    fn test_every_entry_is_reachable() {
        let reachable: HashSet<_> = BADGE_RULES.iter().flat_map(|r| r.candidates()).collect();
        for badge in all_badges() {
            assert!(reachable.contains(badge.slug), "{} has no rule", badge.slug);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("rank_lenda").map(|b| b.label), Some("Lenda"));
        assert_eq!(find("iron_operator").map(|b| b.color), Some("#081534"));
        assert!(find("legacy_badge").is_none());
    }
}
