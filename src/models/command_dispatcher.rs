use crate::constants::RANK_BADGES;
use crate::models::{BreakdownEntry, Command, PeriodKey, QueryArgs, QueryResult};
use crate::utils::rank_label;
use crate::{EmojiTally, Error, InboundMessage};
use log::{error, info};

pub const HELP_TEXT: &str = "🤖 *Bot Contador de Emojis*

📝 *Configuração:*
!emoji add 😀 - Adicionar emoji
!emoji remove 😀 - Remover emoji
!emoji list - Ver emojis rastreados

📊 *Contagem:*
!emoji count 😀 - Ver contagem detalhada
!emoji ranking 😀 - Ver ranking
!emoji user 😀 - Sua contagem

💡 *Exemplos:*
!emoji add 👍
!emoji count 👍
!emoji ranking 😂 12 2024";

pub const UNKNOWN_COMMAND_TEXT: &str = "❓ Comando não reconhecido. Use !emoji help para ajuda.";

/// Routes inbound messages either to command handling or to counting, and renders the
/// textual replies.
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Handles a single inbound message, returning the reply to send back, if any.
    ///
    /// Command messages are never counted but still refresh the author's display name.
    pub fn handle(tally: &mut EmojiTally, message: &InboundMessage) -> Option<String> {
        if !message.is_group_chat {
            return None;
        }

        match Command::parse(&message.text, tally.config().command_prefix) {
            Some(command) => {
                tally.observe_author(message);
                Some(Self::execute(tally, message, command))
            }
            None => {
                tally.ingest(message);
                None
            }
        }
    }

    pub fn execute(tally: &mut EmojiTally, message: &InboundMessage, command: Command) -> String {
        match command {
            Command::Add(symbol) => match tally.add_tracked(symbol.as_deref().unwrap_or("")) {
                Ok(_) => format!("✅ Emoji {} adicionado!", symbol.unwrap_or_default()),
                Err(err) => Self::usage_or_error(err, "❓ Uso: !emoji add 😀"),
            },
            Command::Remove(symbol) => match tally.remove_tracked(symbol.as_deref().unwrap_or(""))
            {
                Ok(_) => format!("❌ Emoji {} removido!", symbol.unwrap_or_default()),
                Err(err) => Self::usage_or_error(err, "❓ Uso: !emoji remove 😀"),
            },
            Command::Count(Some(args)) => Self::render_count(tally, message, &args),
            Command::Count(None) => "❓ Uso: !emoji count 😀 [mês] [ano]".to_string(),
            Command::Ranking(Some(args)) => Self::render_ranking(tally, message, &args),
            Command::Ranking(None) => "❓ Uso: !emoji ranking 😀".to_string(),
            Command::User(Some(args)) => Self::render_user_count(tally, message, &args),
            Command::User(None) => "❓ Uso: !emoji user 😀".to_string(),
            Command::List => Self::render_list(tally),
            Command::Help => HELP_TEXT.to_string(),
            Command::Unknown => UNKNOWN_COMMAND_TEXT.to_string(),
        }
    }

    fn render_count(tally: &EmojiTally, message: &InboundMessage, args: &QueryArgs) -> String {
        let result = tally.query_count(&message.group_id, &args.symbol, args.month, args.year);

        match result {
            QueryResult::Found(summary) => {
                let mut response = format!(
                    "📊 *{} em {}*\n📈 Total: {}\n\n",
                    args.symbol,
                    Self::period_label(tally, args, Some(summary.period)),
                    summary.total
                );

                for entry in &summary.breakdown {
                    response.push_str(&format!(
                        "{} {}: {}\n",
                        Self::count_line_badge(entry.rank),
                        entry.display_name,
                        entry.count
                    ));
                }

                response
            }
            QueryResult::NotFound => format!(
                "📭 Nenhum {} encontrado em {}",
                args.symbol,
                Self::period_label(tally, args, None)
            ),
        }
    }

    fn render_ranking(tally: &EmojiTally, message: &InboundMessage, args: &QueryArgs) -> String {
        let result = tally.query_ranking(&message.group_id, &args.symbol, args.month, args.year);

        match result {
            QueryResult::Found(ranking) => {
                let mut response = format!(
                    "🏆 *Ranking {} - {}*\n\n",
                    args.symbol,
                    Self::period_label(tally, args, Some(ranking.period))
                );

                for entry in &ranking.breakdown {
                    response.push_str(&Self::ranking_line(entry, &args.symbol));
                }

                response
            }
            QueryResult::NotFound => format!(
                "📭 Sem ranking para {} em {}",
                args.symbol,
                Self::period_label(tally, args, None)
            ),
        }
    }

    fn render_user_count(tally: &EmojiTally, message: &InboundMessage, args: &QueryArgs) -> String {
        let user_name = tally.directory().lookup(&message.user_id);

        let result = tally.query_user_count(
            &message.group_id,
            &args.symbol,
            &message.user_id,
            args.month,
            args.year,
        );

        match result {
            QueryResult::Found(user_count) => format!(
                "📊 {}: {}x {} em {}",
                user_name,
                user_count.count,
                args.symbol,
                Self::period_label(tally, args, Some(user_count.period))
            ),
            QueryResult::NotFound => format!(
                "📭 {}, você não enviou {} em {}",
                user_name,
                args.symbol,
                Self::period_label(tally, args, None)
            ),
        }
    }

    fn render_list(tally: &EmojiTally) -> String {
        let tracked = tally.list_tracked();

        if tracked.is_empty() {
            return "📝 Nenhum emoji sendo rastreado.\nUse: !emoji add 😀".to_string();
        }

        format!("📋 Rastreando: {}", tracked.join(" "))
    }

    /// Count lines carry the bare medal for the top three and the position number after.
    fn count_line_badge(rank: usize) -> String {
        match rank.checked_sub(1).and_then(|index| RANK_BADGES.get(index)) {
            Some(badge) => badge.to_string(),
            None => format!("{}º", rank),
        }
    }

    fn ranking_line(entry: &BreakdownEntry, symbol: &str) -> String {
        format!(
            "{} {} - {} {}\n",
            rank_label(entry.rank),
            entry.display_name,
            entry.count,
            symbol
        )
    }

    /// Renders the queried period as `month/year`.
    ///
    /// When the period cannot be resolved (an out-of-range month), the raw arguments are
    /// echoed and missing components come from the current clock.
    fn period_label(tally: &EmojiTally, args: &QueryArgs, resolved: Option<PeriodKey>) -> String {
        if let Some(period) = resolved.or_else(|| tally.resolve_period(args.month, args.year).ok())
        {
            return format!("{}/{}", period.month(), period.year());
        }

        let current = PeriodKey::from_timestamp(tally.now()).ok();
        let month = args.month.or_else(|| current.map(|period| period.month()));
        let year = args.year.or_else(|| current.map(|period| period.year()));

        format!(
            "{}/{}",
            month.map_or_else(String::new, |month| month.to_string()),
            year.map_or_else(String::new, |year| year.to_string())
        )
    }

    fn usage_or_error(err: Error, usage: &str) -> String {
        match err {
            Error::InvalidArgument(_) => usage.to_string(),
            err => {
                error!("Failed to execute command: {}", err);
                "❌ Erro interno. Tente novamente em alguns segundos.".to_string()
            }
        }
    }
}

/// Replays a sequence of inbound messages through the dispatcher, collecting replies.
pub fn replay_messages(tally: &mut EmojiTally, messages: &[InboundMessage]) -> Vec<String> {
    let replies: Vec<String> = messages
        .iter()
        .filter_map(|message| CommandDispatcher::handle(tally, message))
        .collect();

    info!(
        "Replayed {} messages, {} replies",
        messages.len(),
        replies.len()
    );

    replies
}
