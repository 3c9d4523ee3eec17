//! ロシア語 → ポーランド語の用語表
//!
//! ドキュメント翻訳時に手作業で参照する。大文字・小文字の違いは別の用語として扱う。

/// (Russian, Polish) pairs.
pub(super) const RU_PL: &[(&str, &str)] = &[
    ("Финансово Трекер", "Finansowy Tracker"),
    ("приложение", "aplikacja"),
    ("операция", "transakcja"),
    ("операции", "transakcje"),
    ("экран", "ekran"),
    ("экраны", "ekrany"),
    ("категория", "kategoria"),
    ("категории", "kategorie"),
    ("компонент", "komponent"),
    ("компоненты", "komponenty"),
    ("услуга", "usługa"),
    ("утилита", "narzędzie"),
    ("утилиты", "narzędzia"),
    ("константы", "stałe"),
    ("навигация", "nawigacja"),
    ("контекст", "kontekst"),
    ("состояние", "stan"),
    ("хранилище", "przechowywanie"),
    ("данные", "dane"),
    ("валидация", "walidacja"),
    ("ошибка", "błąd"),
    ("документация", "dokumentacja"),
    ("архитектура", "architektura"),
    ("структура", "struktura"),
    ("проект", "projekt"),
    ("Проект", "Projekt"),
    ("ПРОЕКТ", "PROJEKT"),
    ("экспорт", "eksport"),
    ("импорт", "import"),
    ("сброс", "reset"),
    ("настройка", "ustawienie"),
    ("настройки", "ustawienia"),
    ("валюта", "waluta"),
    ("валюты", "waluty"),
    ("доход", "przychód"),
    ("доходы", "przychody"),
    ("расход", "wydatek"),
    ("расходы", "wydatki"),
    ("статистика", "statystyka"),
    ("статистики", "statystyki"),
];
