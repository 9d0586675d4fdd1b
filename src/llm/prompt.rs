/// 构建 commit message 生成 prompt
///
/// 单条 user 消息：要求模型分析 diff，并用 `lang` 指定的语言输出纯文本的
/// commit message。`notes` 原样追加，不做转义或校验。
pub fn build_commit_prompt(diff: &str, lang: &str, notes: &str) -> String {
    format!(
        "Analyze the following code changes and generate a concise Git commit message, \
         providing it in the following languages: {}. Text only: \n\n{}\n\n {} \n\n",
        lang, diff, notes
    )
}
