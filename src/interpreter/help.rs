//! Static help and usage text.

use super::alias::Vocabulary;

const HELP_EN: &str = "
AVAILABLE COMMANDS:
-------------------
  help                  Show this help message
  clear                 Clear the terminal screen
  search [query]        Search for movies and TV shows
  top [movie|tv]        List top rated movies or TV shows
  now_playing           List movies currently in theaters
  upcoming              List upcoming movies
  info [id] [type]      Get details for a specific ID (type: movie|tv)
  play [type] [id]      Play a movie or TV show
  animation [type]      Set background animation (matrix, fallout, off)
  sound [on/off]        Toggle sound effects
  zoom [level]          Set font size (1-5)
  neofetch              Show system information
";

const HELP_TR: &str = "
MEVCUT KOMUTLAR:
----------------
  yardım                Bu yardım mesajını göster
  temizle               Terminal ekranını temizle
  ara [sorgu]           Film ve dizileri ara
  top [movie|tv]        En çok oy alan film veya dizileri listele
  vizyondakiler         Vizyondaki filmleri listele
  yakinda               Yakında çıkacak filmleri listele
  bilgi [id] [type]     Belirli bir ID için detayları getir
  oynat [type] [id]     Film veya dizi oynat
  animasyon [tur]       Arka plan animasyonunu ayarla (matrix, fallout, kapat)
  ses [ac/kapat]        Ses efektlerini aç/kapat
  zoom [seviye]         Yazı boyutunu ayarla (1-5)
  sistem                Sistem bilgilerini göster
";

pub const ANIMATION_USAGE: &str =
    "Usage: animation [matrix|fallout|off] / animasyon [matrix|fallout|kapat]";
pub const SOUND_USAGE: &str = "Usage: sound [on/off] / ses [ac/kapat]";
pub const ZOOM_USAGE: &str = "Usage: zoom [1-5]";
pub const SEARCH_USAGE: &str = "Usage: search [query] / Kullanım: ara [sorgu]";
pub const DETAIL_USAGE: &str = "Usage: info [id] [movie|tv] / Kullanım: bilgi [id] [movie|tv]";
pub const PLAY_USAGE: &str = "Usage: play [movie|tv] [id] [season] [episode] / Kullanım: oynat [movie|tv] [id] [sezon] [bölüm]";

pub const NO_RESULTS: &str = "No results found. (Sonuç bulunamadı.)";

/// Help text in the language of the alias the user typed
pub fn help_text(vocabulary: Vocabulary) -> &'static str {
    match vocabulary {
        Vocabulary::English => HELP_EN,
        Vocabulary::Turkish => HELP_TR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_should_list_commands_in_requested_language() {
        assert!(help_text(Vocabulary::English).contains("AVAILABLE COMMANDS"));
        assert!(help_text(Vocabulary::Turkish).contains("MEVCUT KOMUTLAR"));
        assert!(help_text(Vocabulary::Turkish).contains("oynat"));
    }

    #[test]
    fn usage_messages_should_mention_both_vocabularies() {
        assert!(SEARCH_USAGE.contains("search") && SEARCH_USAGE.contains("ara"));
        assert!(PLAY_USAGE.contains("play") && PLAY_USAGE.contains("oynat"));
        assert!(DETAIL_USAGE.contains("info") && DETAIL_USAGE.contains("bilgi"));
        assert!(SOUND_USAGE.contains("sound") && SOUND_USAGE.contains("ses"));
        assert!(ANIMATION_USAGE.contains("animation") && ANIMATION_USAGE.contains("animasyon"));
    }
}
